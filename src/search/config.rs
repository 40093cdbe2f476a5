//! Search configuration.
//!
//! [`SearchConfig`] holds the few parameters a run accepts: population
//! size, mutation rate, seed and the termination rule.

use crate::error::{Error, Result};
use crate::genome::Fitness;

/// Configuration shared by all three strategies.
///
/// # Defaults
///
/// ```
/// use u_weasel::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert!(config.mutation_rate.is_none());
/// assert!(config.max_evaluations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_weasel::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_population_size(50)
///     .with_max_evaluations(100_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of individuals, fixed for the whole run.
    pub population_size: usize,

    /// Per-symbol mutation probability (0.0–1.0).
    ///
    /// `None` uses `1/L`, i.e. one expected mutation per individual.
    pub mutation_rate: Option<f64>,

    /// Hard cap on fitness evaluations, excluding the initial population.
    ///
    /// `None` searches until the terminal fitness is reached, which has no
    /// worst-case bound.
    pub max_evaluations: Option<u64>,

    /// Fitness at which the search counts as solved.
    ///
    /// `None` requires a perfect match (`L`).
    pub terminal_fitness: Option<Fitness>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            mutation_rate: None,
            max_evaluations: None,
            terminal_fitness: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Overrides the `1/L` mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate.clamp(0.0, 1.0));
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = Some(n);
        self
    }

    /// Sets the fitness that ends the search.
    pub fn with_terminal_fitness(mut self, fitness: Fitness) -> Self {
        self.terminal_fitness = Some(fitness);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mutation rate for a target of length `target_len`.
    pub fn effective_mutation_rate(&self, target_len: usize) -> f64 {
        match self.mutation_rate {
            Some(rate) => rate,
            None if target_len == 0 => 1.0,
            None => 1.0 / target_len as f64,
        }
    }

    /// Terminal fitness for a target of length `target_len`.
    pub fn effective_terminal_fitness(&self, target_len: usize) -> Fitness {
        self.terminal_fitness.unwrap_or(target_len)
    }

    /// Validates the configuration against a target length.
    pub fn validate(&self, target_len: usize) -> Result<()> {
        if self.population_size < 1 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if let Some(rate) = self.mutation_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::InvalidConfig(format!(
                    "mutation_rate must be within [0, 1], got {rate}"
                )));
            }
        }
        if self.max_evaluations == Some(0) {
            return Err(Error::InvalidConfig(
                "max_evaluations must be positive or None".into(),
            ));
        }
        if let Some(terminal) = self.terminal_fitness {
            if terminal > target_len {
                return Err(Error::InvalidConfig(format!(
                    "terminal_fitness {terminal} exceeds target length {target_len}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.population_size, 500);
        assert!(config.mutation_rate.is_none());
        assert!(config.max_evaluations.is_none());
        assert!(config.terminal_fitness.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_population_size(50)
            .with_mutation_rate(0.05)
            .with_max_evaluations(1000)
            .with_terminal_fitness(3)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.mutation_rate, Some(0.05));
        assert_eq!(config.max_evaluations, Some(1000));
        assert_eq!(config.terminal_fitness, Some(3));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_effective_mutation_rate() {
        let config = SearchConfig::default();
        assert!((config.effective_mutation_rate(28) - 1.0 / 28.0).abs() < 1e-15);
        assert!((config.effective_mutation_rate(1) - 1.0).abs() < 1e-15);

        let config = config.with_mutation_rate(0.25);
        assert!((config.effective_mutation_rate(28) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(SearchConfig::default().with_mutation_rate(1.5).mutation_rate, Some(1.0));
        assert_eq!(SearchConfig::default().with_mutation_rate(-0.5).mutation_rate, Some(0.0));
    }

    #[test]
    fn test_effective_terminal_fitness() {
        assert_eq!(SearchConfig::default().effective_terminal_fitness(10), 10);
        assert_eq!(
            SearchConfig::default()
                .with_terminal_fitness(7)
                .effective_terminal_fitness(10),
            7
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::default().validate(28).is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = SearchConfig::default().with_population_size(0);
        assert!(config.validate(28).is_err());
    }

    #[test]
    fn test_validate_single_individual() {
        let config = SearchConfig::default().with_population_size(1);
        assert!(config.validate(1).is_ok());
    }

    #[test]
    fn test_validate_zero_budget() {
        let config = SearchConfig::default().with_max_evaluations(0);
        assert!(config.validate(28).is_err());
    }

    #[test]
    fn test_validate_unreachable_terminal_fitness() {
        let config = SearchConfig::default().with_terminal_fitness(4);
        assert!(config.validate(3).is_err());
        assert!(config.validate(4).is_ok());
    }

    #[test]
    fn test_validate_nan_rate() {
        let config = SearchConfig {
            mutation_rate: Some(f64::NAN),
            ..SearchConfig::default()
        };
        assert!(config.validate(10).is_err());
    }
}
