//! Evolutionary string search: the "weasel" benchmark.
//!
//! Evolves fixed-length character sequences toward a target that the
//! algorithms only observe through a match-count fitness, and compares
//! three strategies:
//!
//! - **Hill Climber**: a population of independent greedy climbers; each
//!   slot keeps a mutant only when it is strictly fitter.
//! - **Steady-State GA (mutation only)**: binary-tournament parent,
//!   one mutated child per iteration, binary-tournament victim.
//! - **Steady-State GA (recombination)**: as above with uniform crossover
//!   of two tournament winners before mutation.
//!
//! # Architecture
//!
//! - [`genome`]: alphabet, individuals, target, operators, population
//! - [`search`]: configuration, the three strategies and their runner
//! - [`experiment`]: repeated seeded runs and summary statistics
//!
//! Randomness is always an explicit, seedable generator (see [`random`]),
//! so equal seeds reproduce a run exactly.

pub mod error;
pub mod experiment;
pub mod genome;
pub mod random;
pub mod search;

pub use error::{Error, Result};
