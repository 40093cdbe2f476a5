//! Search loop execution.
//!
//! [`SearchRunner`] owns the run lifecycle:
//! validate → seed → random population → step until stop → result.

use super::config::SearchConfig;
use super::hill_climber::HillClimber;
use super::state::SearchState;
use super::steady_state::SteadyStateGa;
use super::types::{Evolver, Progress, SearchObserver, Strategy};
use crate::error::Result;
use crate::genome::{random_population, Entry, Fitness, Target};
use crate::random::rng_from_seed;
use rand::Rng;

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,

    /// The best entry found during the whole run.
    pub best: Entry,

    /// Best fitness (same as `best.fitness`).
    pub best_fitness: Fitness,

    /// Fitness evaluations performed, excluding the initial population.
    pub evaluations: u64,

    /// `false` only when the evaluation budget ended the run before the
    /// terminal fitness was reached.
    pub converged: bool,

    /// Every strict improvement of the best-so-far, starting with the
    /// initial population's best at zero evaluations.
    pub progress: Vec<Progress>,
}

/// Executes a search strategy.
///
/// # Usage
///
/// ```
/// use u_weasel::genome::{Alphabet, Target};
/// use u_weasel::search::{SearchConfig, SearchRunner, Strategy};
///
/// let target = Target::new("cat", Alphabet::lowercase()).unwrap();
/// let config = SearchConfig::default()
///     .with_population_size(50)
///     .with_max_evaluations(100_000)
///     .with_seed(42);
/// let result = SearchRunner::run(&target, Strategy::HillClimber, &config).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.best.individual.to_string(), "cat");
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs `strategy` on `target`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration does not fit the target.
    pub fn run(target: &Target, strategy: Strategy, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_observer(target, strategy, config, &mut ())
    }

    /// Runs `strategy`, reporting every improvement to `observer` as soon
    /// as the step that found it returns.
    pub fn run_with_observer<O: SearchObserver>(
        target: &Target,
        strategy: Strategy,
        config: &SearchConfig,
        observer: &mut O,
    ) -> Result<SearchResult> {
        config.validate(target.len())?;

        let mut rng = rng_from_seed(config.seed);
        let rate = config.effective_mutation_rate(target.len());

        // 1. Initialize and evaluate population
        let population = random_population(config.population_size, target, &mut rng);
        let mut state = SearchState::new(
            population,
            config.effective_terminal_fitness(target.len()),
            config.max_evaluations,
        );

        log::info!(
            "{strategy}: N={}, L={}, mutation rate {rate:.4}, initial best {}",
            config.population_size,
            target.len(),
            state.best().fitness
        );

        // 2. Evolve
        match strategy {
            Strategy::HillClimber => drive(
                &mut HillClimber::new(rate),
                strategy,
                &mut state,
                target,
                &mut rng,
                observer,
            )?,
            Strategy::MutationGa => drive(
                &mut SteadyStateGa::mutation_only(rate),
                strategy,
                &mut state,
                target,
                &mut rng,
                observer,
            )?,
            Strategy::CrossoverGa => drive(
                &mut SteadyStateGa::with_recombination(rate),
                strategy,
                &mut state,
                target,
                &mut rng,
                observer,
            )?,
        }

        // 3. Report
        let converged = state.is_solved();
        if converged {
            log::info!(
                "{strategy}: reached fitness {} after {} evaluations",
                state.best().fitness,
                state.evaluations()
            );
        } else {
            log::warn!(
                "{strategy}: evaluation budget exhausted at fitness {}/{}",
                state.best().fitness,
                target.len()
            );
        }

        let (best, evaluations, progress) = state.into_parts();
        Ok(SearchResult {
            strategy,
            best_fitness: best.fitness,
            best,
            evaluations,
            converged,
            progress,
        })
    }
}

/// Steps `evolver` until the state says stop, forwarding new progress
/// records to the observer after each step.
fn drive<E: Evolver, R: Rng, O: SearchObserver>(
    evolver: &mut E,
    strategy: Strategy,
    state: &mut SearchState,
    target: &Target,
    rng: &mut R,
    observer: &mut O,
) -> Result<()> {
    let mut reported = 0;
    loop {
        for record in &state.progress()[reported..] {
            observer.on_improvement(strategy, record);
        }
        reported = state.progress().len();

        if state.should_stop() {
            return Ok(());
        }
        evolver.step(state, target, rng)?;
    }
}

// ============================================================================
// Tests
// ============================================================================
