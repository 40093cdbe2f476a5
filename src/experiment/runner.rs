//! Repeated, seeded comparison runs.

use super::summary::StrategySummary;
use crate::error::{Error, Result};
use crate::genome::Target;
use crate::search::{SearchConfig, SearchObserver, SearchResult, SearchRunner, Strategy};

/// Runs several strategies on one target, each from its own fresh random
/// population, and summarises their evaluation counts.
///
/// When the configuration carries a seed, repetition `r` of every strategy
/// uses seed `seed + r`, so strategies are compared on equal streams.
///
/// # Examples
///
/// ```
/// use u_weasel::experiment::Experiment;
/// use u_weasel::genome::{Alphabet, Target};
/// use u_weasel::search::{SearchConfig, Strategy};
///
/// let target = Target::new("cat", Alphabet::lowercase()).unwrap();
/// let config = SearchConfig::default().with_population_size(50).with_seed(1);
/// let report = Experiment::new(target, config)
///     .with_strategies(vec![Strategy::HillClimber])
///     .with_repetitions(3)
///     .run()
///     .unwrap();
/// assert_eq!(report.summaries[0].runs, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    target: Target,
    config: SearchConfig,
    strategies: Vec<Strategy>,
    repetitions: usize,
}

/// Output of an [`Experiment`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    /// Every run, grouped by strategy in the configured order.
    pub results: Vec<SearchResult>,

    /// One summary per strategy, in the configured order.
    pub summaries: Vec<StrategySummary>,
}

impl Experiment {
    /// All three strategies, one repetition each.
    pub fn new(target: Target, config: SearchConfig) -> Self {
        Self {
            target,
            config,
            strategies: Strategy::ALL.to_vec(),
            repetitions: 1,
        }
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_repetitions(mut self, n: usize) -> Self {
        self.repetitions = n;
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(Error::InvalidConfig("at least one strategy is required".into()));
        }
        if self.repetitions == 0 {
            return Err(Error::InvalidConfig("repetitions must be at least 1".into()));
        }
        self.config.validate(self.target.len())
    }

    pub fn run(&self) -> Result<ExperimentReport> {
        self.run_with_observer(&mut ())
    }

    /// Runs every strategy `repetitions` times, forwarding progress to
    /// `observer`.
    pub fn run_with_observer<O: SearchObserver>(
        &self,
        observer: &mut O,
    ) -> Result<ExperimentReport> {
        self.validate()?;

        let mut results = Vec::with_capacity(self.strategies.len() * self.repetitions);
        let mut summaries = Vec::with_capacity(self.strategies.len());

        for &strategy in &self.strategies {
            let mut runs = Vec::with_capacity(self.repetitions);
            for repetition in 0..self.repetitions {
                let config = self.config_for(repetition);
                log::debug!("{strategy}: repetition {}/{}", repetition + 1, self.repetitions);
                runs.push(SearchRunner::run_with_observer(
                    &self.target,
                    strategy,
                    &config,
                    observer,
                )?);
            }
            let summary = StrategySummary::from_results(strategy, &runs);
            log::info!(
                "{strategy}: {}/{} converged, mean {:.1} evaluations",
                summary.converged_runs,
                summary.runs,
                summary.mean_evaluations
            );
            summaries.push(summary);
            results.extend(runs);
        }

        Ok(ExperimentReport { results, summaries })
    }

    fn config_for(&self, repetition: usize) -> SearchConfig {
        let mut config = self.config.clone();
        config.seed = self.config.seed.map(|seed| seed.wrapping_add(repetition as u64));
        config
    }
}
