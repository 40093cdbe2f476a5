//! Strategy comparison over repeated runs.
//!
//! An [`Experiment`] runs each selected strategy several times on the same
//! target and reports evaluation-count statistics per strategy
//! ([`StrategySummary`]).

mod runner;
mod summary;

pub use runner::{Experiment, ExperimentReport};
pub use summary::StrategySummary;
