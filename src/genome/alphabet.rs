//! The fixed symbol set individuals are drawn from.

use crate::error::{Error, Result};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// An ordered set of distinct symbols.
///
/// The alphabet is configuration, never discovered from data: the default
/// covers printable ASCII (letters, digits, punctuation and the space
/// character), while tests usually narrow it to speed up convergence.
///
/// # Examples
///
/// ```
/// use u_weasel::genome::Alphabet;
///
/// let ascii = Alphabet::default();
/// assert_eq!(ascii.len(), 95);
/// assert!(ascii.contains(' '));
///
/// let lower = Alphabet::lowercase();
/// assert!(!lower.contains('A'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the given symbols, preserving their order.
    ///
    /// Fails on an empty input or on a repeated symbol; a duplicate would
    /// silently skew [`random_symbol`](super::random_symbol) towards it.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let mut collected: Vec<char> = Vec::new();
        for symbol in symbols {
            if collected.contains(&symbol) {
                return Err(Error::DuplicateSymbol(symbol));
            }
            collected.push(symbol);
        }
        if collected.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(Self { symbols: collected })
    }

    /// Upper and lower case letters, digits, ASCII punctuation and space.
    pub fn ascii() -> Self {
        let symbols = UPPERCASE
            .chars()
            .chain(LOWERCASE.chars())
            .chain(DIGITS.chars())
            .chain(PUNCTUATION.chars())
            .chain(std::iter::once(' '))
            .collect();
        Self { symbols }
    }

    /// The 26 lowercase ASCII letters.
    pub fn lowercase() -> Self {
        Self {
            symbols: LOWERCASE.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii()
    }
}
