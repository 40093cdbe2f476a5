//! Population of independent greedy hill climbers.

use super::state::SearchState;
use super::types::Evolver;
use crate::error::Result;
use crate::genome::{mutate, Target};
use rand::Rng;

/// Sweeps every slot in index order, replacing it with a mutant only when
/// the mutant is strictly fitter.
///
/// Each slot therefore never loses fitness; a full sweep costs `N`
/// evaluations unless the run stops mid-sweep.
#[derive(Debug, Clone, Copy)]
pub struct HillClimber {
    mutation_rate: f64,
}

impl HillClimber {
    pub fn new(mutation_rate: f64) -> Self {
        Self { mutation_rate }
    }
}

impl Evolver for HillClimber {
    fn step<R: Rng>(
        &mut self,
        state: &mut SearchState,
        target: &Target,
        rng: &mut R,
    ) -> Result<()> {
        for i in 0..state.population().len() {
            if state.should_stop() {
                break;
            }

            let current = state.population().get(i);
            let current_fitness = current.fitness;
            let mutant = mutate(&current.individual, target.alphabet(), self.mutation_rate, rng);
            let candidate = state.evaluate(mutant, target);

            if candidate.fitness > current_fitness {
                state.offer(&candidate);
                state.population_mut().set(i, candidate);
            }
        }
        log::trace!(
            "sweep done: {} evaluations, mean fitness {:.2}",
            state.evaluations(),
            state.population().mean_fitness()
        );
        Ok(())
    }
}
