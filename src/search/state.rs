//! Bookkeeping shared by every strategy: population, best-so-far,
//! evaluation counter and the termination rule.

use super::types::Progress;
use crate::genome::{Entry, Fitness, Individual, Population, Target};

/// Mutable state of one search run.
///
/// The best-so-far entry is tracked separately from the population: the
/// steady-state GAs may overwrite the slot that held it.
#[derive(Debug, Clone)]
pub struct SearchState {
    population: Population,
    best: Entry,
    evaluations: u64,
    progress: Vec<Progress>,
    terminal_fitness: Fitness,
    max_evaluations: Option<u64>,
}

impl SearchState {
    /// Starts a run from an evaluated population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn new(
        population: Population,
        terminal_fitness: Fitness,
        max_evaluations: Option<u64>,
    ) -> Self {
        let best = population
            .best()
            .cloned()
            .expect("population must not be empty");
        let progress = vec![Progress {
            evaluations: 0,
            best: best.clone(),
        }];
        Self {
            population,
            best,
            evaluations: 0,
            progress,
            terminal_fitness,
            max_evaluations,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn best(&self) -> &Entry {
        &self.best
    }

    /// Evaluations so far, excluding the initial population.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn progress(&self) -> &[Progress] {
        &self.progress
    }

    pub fn is_solved(&self) -> bool {
        self.best.fitness >= self.terminal_fitness
    }

    pub fn budget_exhausted(&self) -> bool {
        self.max_evaluations
            .is_some_and(|limit| self.evaluations >= limit)
    }

    pub fn should_stop(&self) -> bool {
        self.is_solved() || self.budget_exhausted()
    }

    /// Evaluates `individual` and counts the evaluation.
    pub fn evaluate(&mut self, individual: Individual, target: &Target) -> Entry {
        self.evaluations += 1;
        Entry::evaluated(individual, target)
    }

    /// Records `entry` as the new best if it is strictly fitter.
    ///
    /// Returns `true` when the best changed.
    pub fn offer(&mut self, entry: &Entry) -> bool {
        if entry.fitness <= self.best.fitness {
            return false;
        }
        self.best = entry.clone();
        self.progress.push(Progress {
            evaluations: self.evaluations,
            best: entry.clone(),
        });
        log::debug!(
            "new best fitness {}/{} after {} evaluations: {:?}",
            entry.fitness,
            entry.individual.len(),
            self.evaluations,
            entry.individual.to_string()
        );
        true
    }

    pub(crate) fn into_parts(self) -> (Entry, u64, Vec<Progress>) {
        (self.best, self.evaluations, self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, fitness: Fitness) -> Entry {
        Entry {
            individual: Individual::from(text),
            fitness,
        }
    }

    #[test]
    fn test_new_records_initial_best() {
        let state = SearchState::new(
            Population::new(vec![entry("ab", 0), entry("cd", 1)]),
            2,
            None,
        );
        assert_eq!(state.best(), &entry("cd", 1));
        assert_eq!(state.evaluations(), 0);
        assert_eq!(state.progress().len(), 1);
        assert_eq!(state.progress()[0].evaluations, 0);
        assert!(!state.should_stop());
    }

    #[test]
    fn test_offer_requires_strict_improvement() {
        let mut state = SearchState::new(Population::new(vec![entry("ab", 1)]), 2, None);
        assert!(!state.offer(&entry("xb", 1)));
        assert!(!state.offer(&entry("xx", 0)));
        assert_eq!(state.progress().len(), 1);

        assert!(state.offer(&entry("ab", 2)));
        assert_eq!(state.progress().len(), 2);
        assert!(state.is_solved());
    }

    #[test]
    fn test_budget_exhaustion() {
        let target = Target::ascii("ab").unwrap();
        let mut state = SearchState::new(Population::new(vec![entry("xx", 0)]), 2, Some(2));
        state.evaluate(Individual::from("xy"), &target);
        assert!(!state.budget_exhausted());
        state.evaluate(Individual::from("xz"), &target);
        assert!(state.budget_exhausted());
        assert!(state.should_stop());
        assert!(!state.is_solved());
    }

    #[test]
    fn test_solved_initial_population_stops_immediately() {
        let state = SearchState::new(Population::new(vec![entry("ab", 2)]), 2, None);
        assert!(state.should_stop());
    }

    #[test]
    #[should_panic(expected = "population must not be empty")]
    fn test_empty_population_panics() {
        SearchState::new(Population::new(Vec::new()), 1, None);
    }
}
