//! String representation and generation operators.
//!
//! Individuals are fixed-length character sequences scored by how many
//! positions match a [`Target`]. Everything here is strategy-agnostic:
//! the hill climber and both steady-state GAs build on the same
//! operators.
//!
//! # Key Types
//!
//! - [`Alphabet`]: the symbol set individuals are drawn from
//! - [`Individual`]: an immutable candidate sequence
//! - [`Target`]: the sequence being searched for, plus its alphabet
//! - [`Population`]: fixed-size collection of evaluated [`Entry`] values
//!
//! # References
//!
//! - Dawkins (1986), *The Blind Watchmaker*, ch. 3 ("weasel program")
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod alphabet;
mod individual;
mod operators;
mod population;

pub use alphabet::Alphabet;
pub use individual::{fitness, Fitness, Individual, Target};
pub use operators::{mutate, random_individual, random_symbol, recombine};
pub use population::{random_population, Entry, Population};
