//! Strategy selection, progress records and the per-step contract.

use super::state::SearchState;
use crate::error::{Error, Result};
use crate::genome::{Entry, Target};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// The three search strategies.
///
/// # Examples
///
/// ```
/// use u_weasel::search::Strategy;
///
/// let s: Strategy = "crossover-ga".parse().unwrap();
/// assert_eq!(s, Strategy::CrossoverGa);
/// assert_eq!(s.to_string(), "crossover-ga");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Per-slot greedy mutation: each sweep mutates every slot once and
    /// keeps the mutant only on strict improvement.
    HillClimber,

    /// Steady-state GA, mutation only: one binary-tournament parent,
    /// one child per iteration.
    MutationGa,

    /// Steady-state GA with uniform recombination of two
    /// binary-tournament parents.
    CrossoverGa,
}

impl Strategy {
    /// All strategies, in the order they are usually compared.
    pub const ALL: [Strategy; 3] = [
        Strategy::HillClimber,
        Strategy::MutationGa,
        Strategy::CrossoverGa,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::HillClimber => "hill-climber",
            Strategy::MutationGa => "mutation-ga",
            Strategy::CrossoverGa => "crossover-ga",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s.trim())
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// A new best-so-far, recorded when the best fitness strictly increases.
///
/// The first record of every run has `evaluations == 0` and holds the best
/// entry of the initial population.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Evaluations performed when this best was found.
    pub evaluations: u64,

    pub best: Entry,
}

/// Receives progress records as a run improves.
///
/// Called in order, once per [`Progress`] record, from the thread running
/// the search. `()` is the no-op observer.
pub trait SearchObserver {
    fn on_improvement(&mut self, strategy: Strategy, progress: &Progress);
}

impl SearchObserver for () {
    fn on_improvement(&mut self, _strategy: Strategy, _progress: &Progress) {}
}

/// One strategy's unit of work.
///
/// A step is a full population sweep for the hill climber and a single
/// replacement for the steady-state GAs. Implementations must return as
/// soon as [`SearchState::should_stop`] holds, even mid-sweep.
pub trait Evolver {
    fn step<R: Rng>(
        &mut self,
        state: &mut SearchState,
        target: &Target,
        rng: &mut R,
    ) -> Result<()>;
}
