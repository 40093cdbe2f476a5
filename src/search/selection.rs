//! Binary tournaments for parent choice and victim choice.
//!
//! Both tournaments draw two indices uniformly with replacement, so the
//! same slot may be drawn twice.
//!
//! # Tie-breaking
//!
//! - Parent tournament: ties go to the **first** draw.
//! - Victim tournament: ties go to the **second** draw.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::genome::Population;
use rand::Rng;

/// Index of the fitter of two random slots.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parent<R: Rng>(population: &Population, rng: &mut R) -> usize {
    let (a, b) = draw_pair(population, rng);
    if population.fitness_at(b) > population.fitness_at(a) {
        b
    } else {
        a
    }
}

/// Index of the less fit of two random slots, to be overwritten.
///
/// This is a binary tournament, not population-worst replacement: the
/// victim is only the worse of the two slots drawn.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_victim<R: Rng>(population: &Population, rng: &mut R) -> usize {
    let (a, b) = draw_pair(population, rng);
    if population.fitness_at(a) < population.fitness_at(b) {
        a
    } else {
        b
    }
}

fn draw_pair<R: Rng>(population: &Population, rng: &mut R) -> (usize, usize) {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Entry, Fitness, Individual};
    use crate::random::create_rng;

    fn make_population(fitnesses: &[Fitness]) -> Population {
        Population::new(
            fitnesses
                .iter()
                .map(|&fitness| Entry {
                    individual: Individual::from("x"),
                    fitness,
                })
                .collect(),
        )
    }

    #[test]
    fn test_parent_tournament_favors_fit() {
        let pop = make_population(&[0, 1, 5, 2]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[select_parent(&pop, &mut rng)] += 1;
        }
        // P(best of two includes slot 2) = 1 - (3/4)^2 = 0.4375
        let best_count = counts[2];
        assert!(
            best_count > 4000,
            "expected fittest slot near 44%, got {best_count}/{n}"
        );
        assert!(counts[0] < counts[2]);
    }

    #[test]
    fn test_victim_tournament_favors_unfit() {
        let pop = make_population(&[0, 1, 5, 2]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[select_victim(&pop, &mut rng)] += 1;
        }
        assert!(
            counts[0] > 4000,
            "expected least fit slot near 44%, got {}/{n}",
            counts[0]
        );
        assert!(counts[2] < counts[0]);
    }

    #[test]
    fn test_victim_is_fitter_slot_only_when_drawn_twice() {
        let pop = make_population(&[3, 1]);
        let mut rng = create_rng(7);
        let n = 10000;
        let hits = (0..n).filter(|_| select_victim(&pop, &mut rng) == 0).count();
        assert!(
            (2000..3000).contains(&hits),
            "expected about 25% (both draws on slot 0), got {hits}/{n}"
        );
    }

    #[test]
    fn test_equal_fitness_is_uniform() {
        let pop = make_population(&[2, 2, 2, 2]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[select_parent(&pop, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_parent_tie_goes_to_first_draw() {
        let pop = make_population(&[1, 1, 1, 1, 1, 1]);
        let mut probe = create_rng(99);
        let first = probe.random_range(0..6usize);

        let mut rng = create_rng(99);
        assert_eq!(select_parent(&pop, &mut rng), first);
    }

    #[test]
    fn test_victim_tie_goes_to_second_draw() {
        let pop = make_population(&[1, 1, 1, 1, 1, 1]);
        let mut probe = create_rng(99);
        let _first = probe.random_range(0..6usize);
        let second = probe.random_range(0..6usize);

        let mut rng = create_rng(99);
        assert_eq!(select_victim(&pop, &mut rng), second);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[4]);
        let mut rng = create_rng(42);
        assert_eq!(select_parent(&pop, &mut rng), 0);
        assert_eq!(select_victim(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop = make_population(&[]);
        let mut rng = create_rng(42);
        select_parent(&pop, &mut rng);
    }
}
