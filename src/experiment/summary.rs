//! Per-strategy statistics over repeated runs.

use crate::search::{SearchResult, Strategy};

/// Evaluation-count statistics for one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategySummary {
    pub strategy: Strategy,

    /// Number of runs summarised.
    pub runs: usize,

    /// Runs that reached the terminal fitness within budget.
    pub converged_runs: usize,

    /// Mean evaluations over all runs.
    pub mean_evaluations: f64,

    /// Population standard deviation of evaluations over all runs.
    pub std_dev_evaluations: f64,

    pub min_evaluations: u64,
    pub max_evaluations: u64,
}

impl StrategySummary {
    /// Summarises `results`, which should all come from `strategy`.
    ///
    /// An empty slice gives zeroed statistics.
    pub fn from_results(strategy: Strategy, results: &[SearchResult]) -> Self {
        let runs = results.len();
        let converged_runs = results.iter().filter(|r| r.converged).count();
        let counts: Vec<f64> = results.iter().map(|r| r.evaluations as f64).collect();

        let (mean, std_dev) = if runs == 0 {
            (0.0, 0.0)
        } else {
            let mean = counts.iter().sum::<f64>() / runs as f64;
            let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / runs as f64;
            (mean, variance.sqrt())
        };

        Self {
            strategy,
            runs,
            converged_runs,
            mean_evaluations: mean,
            std_dev_evaluations: std_dev,
            min_evaluations: results.iter().map(|r| r.evaluations).min().unwrap_or(0),
            max_evaluations: results.iter().map(|r| r.evaluations).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Entry, Individual};

    fn result(evaluations: u64, converged: bool) -> SearchResult {
        let best = Entry {
            individual: Individual::from("a"),
            fitness: 1,
        };
        SearchResult {
            strategy: Strategy::HillClimber,
            best_fitness: best.fitness,
            best,
            evaluations,
            converged,
            progress: Vec::new(),
        }
    }

    #[test]
    fn test_summary_statistics() {
        let results = [
            result(2, true),
            result(4, true),
            result(4, true),
            result(4, true),
            result(5, true),
            result(5, false),
            result(7, true),
            result(9, true),
        ];
        let summary = StrategySummary::from_results(Strategy::HillClimber, &results);

        assert_eq!(summary.runs, 8);
        assert_eq!(summary.converged_runs, 7);
        assert!((summary.mean_evaluations - 5.0).abs() < 1e-12);
        assert!((summary.std_dev_evaluations - 2.0).abs() < 1e-12);
        assert_eq!(summary.min_evaluations, 2);
        assert_eq!(summary.max_evaluations, 9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = StrategySummary::from_results(Strategy::MutationGa, &[]);
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.mean_evaluations, 0.0);
        assert_eq!(summary.std_dev_evaluations, 0.0);
        assert_eq!(summary.min_evaluations, 0);
    }
}
