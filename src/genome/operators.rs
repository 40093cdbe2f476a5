//! Generation operators for string individuals.
//!
//! Every operator takes the random generator explicitly and consumes it in
//! a fixed order, so a seeded run is reproducible draw for draw.
//!
//! # Operators
//!
//! - [`random_symbol`]: uniform draw from an [`Alphabet`]
//! - [`random_individual`]: `length` independent symbol draws
//! - [`mutate`]: per-symbol replacement with probability `rate`
//! - [`recombine`]: uniform crossover, one coin flip per position

use super::alphabet::Alphabet;
use super::individual::Individual;
use crate::error::{Error, Result};
use rand::Rng;

/// Probability of taking a symbol from the first parent in [`recombine`].
const PARENT_BIAS: f64 = 0.5;

/// Draws one symbol uniformly from `alphabet`.
pub fn random_symbol<R: Rng>(alphabet: &Alphabet, rng: &mut R) -> char {
    let symbols = alphabet.symbols();
    symbols[rng.random_range(0..symbols.len())]
}

/// Builds an individual of `length` independently drawn symbols.
pub fn random_individual<R: Rng>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Individual {
    (0..length).map(|_| random_symbol(alphabet, rng)).collect()
}

/// Returns a copy of `individual` where each symbol is replaced by a fresh
/// [`random_symbol`] with probability `rate`.
///
/// One uniform `f64` is drawn per position; a symbol draw follows only when
/// it falls below `rate`. With `rate = 0` the copy is exact, with
/// `rate = 1` every position is redrawn (and may land on the same symbol).
///
/// # Complexity
/// O(L)
pub fn mutate<R: Rng>(
    individual: &Individual,
    alphabet: &Alphabet,
    rate: f64,
    rng: &mut R,
) -> Individual {
    individual
        .symbols()
        .iter()
        .map(|&symbol| {
            if rng.random::<f64>() < rate {
                random_symbol(alphabet, rng)
            } else {
                symbol
            }
        })
        .collect()
}

/// Uniform crossover: each position independently takes `parent1`'s symbol
/// with probability 0.5, otherwise `parent2`'s.
///
/// # Errors
/// [`Error::LengthMismatch`] if the parents differ in length. The child is
/// never truncated or padded.
pub fn recombine<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> Result<Individual> {
    if parent1.len() != parent2.len() {
        return Err(Error::LengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }

    Ok(parent1
        .symbols()
        .iter()
        .zip(parent2.symbols())
        .map(|(&a, &b)| if rng.random::<f64>() < PARENT_BIAS { a } else { b })
        .collect())
}
