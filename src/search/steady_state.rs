//! Steady-state (μ+1) genetic algorithms.
//!
//! Each step produces exactly one child and evaluates it once:
//!
//! 1. Binary tournament for the parent (or two independent tournaments
//!    when recombination is enabled: parent1 first, then parent2)
//! 2. Child = mutate(parent) or mutate(recombine(parent1, parent2))
//! 3. Binary tournament for the victim slot, which the child overwrites
//! 4. Best-so-far update
//!
//! # References
//!
//! - Whitley (1989), "The GENITOR Algorithm and Selection Pressure"
//! - Syswerda (1991), "A Study of Reproduction in Generational and
//!   Steady-State Genetic Algorithms"

use super::selection::{select_parent, select_victim};
use super::state::SearchState;
use super::types::Evolver;
use crate::error::Result;
use crate::genome::{mutate, recombine, Target};
use rand::Rng;

/// Steady-state GA with optional uniform recombination.
#[derive(Debug, Clone, Copy)]
pub struct SteadyStateGa {
    mutation_rate: f64,
    recombination: bool,
}

impl SteadyStateGa {
    /// Mutation-only variant.
    pub fn mutation_only(mutation_rate: f64) -> Self {
        Self {
            mutation_rate,
            recombination: false,
        }
    }

    /// Variant recombining two tournament winners before mutation.
    pub fn with_recombination(mutation_rate: f64) -> Self {
        Self {
            mutation_rate,
            recombination: true,
        }
    }
}

impl Evolver for SteadyStateGa {
    fn step<R: Rng>(
        &mut self,
        state: &mut SearchState,
        target: &Target,
        rng: &mut R,
    ) -> Result<()> {
        if state.should_stop() {
            return Ok(());
        }

        let population = state.population();
        let p1 = select_parent(population, rng);
        let offspring = if self.recombination {
            let p2 = select_parent(population, rng);
            recombine(
                &population.get(p1).individual,
                &population.get(p2).individual,
                rng,
            )?
        } else {
            population.get(p1).individual.clone()
        };
        let child = mutate(&offspring, target.alphabet(), self.mutation_rate, rng);
        let child = state.evaluate(child, target);

        let victim = select_victim(state.population(), rng);
        state.offer(&child);
        state.population_mut().set(victim, child);
        Ok(())
    }
}
