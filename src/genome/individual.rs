//! Candidate solutions, the target and the match-count fitness.

use super::alphabet::Alphabet;
use crate::error::{Error, Result};
use std::fmt;

/// Fitness of an individual: number of positions equal to the target.
///
/// Always in `[0, L]` for a target of length `L`.
pub type Fitness = usize;

/// A fixed-length sequence of symbols.
///
/// Individuals are values: operators build new ones instead of editing
/// existing ones, so a stored fitness can never go stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    symbols: Vec<char>,
}

impl Individual {
    pub fn new(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl From<&str> for Individual {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect())
    }
}

impl FromIterator<char> for Individual {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// The sequence being searched for, together with its alphabet.
///
/// Only the fitness function looks at the target sequence; strategies
/// see its length and alphabet, nothing else.
///
/// # Examples
///
/// ```
/// use u_weasel::genome::{Alphabet, Individual, Target};
///
/// let target = Target::new("cat", Alphabet::lowercase()).unwrap();
/// assert_eq!(target.len(), 3);
/// assert_eq!(target.fitness(&Individual::from("cot")), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    sequence: Individual,
    alphabet: Alphabet,
}

impl Target {
    /// Builds a target, checking that it is non-empty and that every
    /// symbol belongs to `alphabet`. An out-of-alphabet symbol could never
    /// be matched, so the search would not terminate.
    pub fn new(text: &str, alphabet: Alphabet) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyTarget);
        }
        if let Some(bad) = text.chars().find(|&c| !alphabet.contains(c)) {
            return Err(Error::SymbolNotInAlphabet(bad));
        }
        Ok(Self {
            sequence: Individual::from(text),
            alphabet,
        })
    }

    /// Builds a target over the default ASCII alphabet.
    pub fn ascii(text: &str) -> Result<Self> {
        Self::new(text, Alphabet::ascii())
    }

    /// Target length `L`, which is also the maximum fitness.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always `false` for a constructed target.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn sequence(&self) -> &Individual {
        &self.sequence
    }

    /// Number of positions where `individual` matches the target.
    pub fn fitness(&self, individual: &Individual) -> Fitness {
        fitness(individual, &self.sequence)
    }
}

/// Counts the positions where `individual` and `target` hold the same
/// symbol. O(L).
pub fn fitness(individual: &Individual, target: &Individual) -> Fitness {
    debug_assert_eq!(
        individual.len(),
        target.len(),
        "individual and target must have equal length"
    );
    individual
        .symbols()
        .iter()
        .zip(target.symbols())
        .filter(|(a, b)| a == b)
        .count()
}
