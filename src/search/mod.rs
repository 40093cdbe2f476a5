//! Search strategies over string individuals.
//!
//! Three strategies share one operator library and one bookkeeping type,
//! and are selected at run time through [`Strategy`]:
//!
//! - [`Strategy::HillClimber`]: every slot is an independent greedy climber
//! - [`Strategy::MutationGa`]: steady-state GA, mutation only
//! - [`Strategy::CrossoverGa`]: steady-state GA with uniform recombination
//!
//! All three stop when the best fitness reaches the terminal fitness
//! (a perfect match by default) or when the optional evaluation budget
//! runs out.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: population size, mutation rate, budget, seed
//! - [`SearchRunner`]: validates, seeds and drives one run
//! - [`SearchResult`]: best entry, evaluation count, progress trace
//! - [`Evolver`]: the per-step contract implemented by each strategy
//!
//! # Determinism
//!
//! A run consumes a single seeded stream: first the initial population,
//! then each step's draws in the order documented by the strategy. Equal
//! seeds and inputs give equal [`SearchResult`]s, progress trace included.

mod config;
mod hill_climber;
mod runner;
mod selection;
mod state;
mod steady_state;
mod types;

pub use config::SearchConfig;
pub use hill_climber::HillClimber;
pub use runner::{SearchResult, SearchRunner};
pub use selection::{select_parent, select_victim};
pub use state::SearchState;
pub use steady_state::SteadyStateGa;
pub use types::{Evolver, Progress, SearchObserver, Strategy};
