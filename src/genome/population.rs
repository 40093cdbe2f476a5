//! Fixed-size population of evaluated individuals.

use super::individual::{Fitness, Individual, Target};
use super::operators::random_individual;
use rand::Rng;

/// An individual paired with its fitness against the run's target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub individual: Individual,
    pub fitness: Fitness,
}

impl Entry {
    /// Evaluates `individual` against `target`.
    pub fn evaluated(individual: Individual, target: &Target) -> Self {
        let fitness = target.fitness(&individual);
        Self {
            individual,
            fitness,
        }
    }
}

/// An ordered collection of [`Entry`] values with fixed cardinality.
///
/// There is no insertion or removal: strategies only overwrite slots by
/// index, so indices stay stable for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    entries: Vec<Entry>,
}

impl Population {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &Entry {
        &self.entries[index]
    }

    pub fn fitness_at(&self, index: usize) -> Fitness {
        self.entries[index].fitness
    }

    /// Overwrites slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, entry: Entry) {
        self.entries[index] = entry;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// The entry with the highest fitness; ties go to the lowest index.
    ///
    /// Returns `None` only for an empty population.
    pub fn best(&self) -> Option<&Entry> {
        self.entries
            .iter()
            .fold(None, |best: Option<&Entry>, entry| match best {
                Some(b) if b.fitness >= entry.fitness => Some(b),
                _ => Some(entry),
            })
    }

    /// Fitness values in slot order.
    pub fn fitnesses(&self) -> Vec<Fitness> {
        self.entries.iter().map(|e| e.fitness).collect()
    }

    /// Mean fitness, `0.0` when empty.
    pub fn mean_fitness(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let total: usize = self.entries.iter().map(|e| e.fitness).sum();
        total as f64 / self.entries.len() as f64
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Creates `size` fresh random individuals of the target's length, each
/// evaluated against `target`.
pub fn random_population<R: Rng>(size: usize, target: &Target, rng: &mut R) -> Population {
    let entries = (0..size)
        .map(|_| {
            let individual = random_individual(target.alphabet(), target.len(), rng);
            Entry::evaluated(individual, target)
        })
        .collect();
    Population::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Alphabet;
    use crate::random::create_rng;

    fn entry(text: &str, fitness: Fitness) -> Entry {
        Entry {
            individual: Individual::from(text),
            fitness,
        }
    }

    #[test]
    fn test_random_population_is_consistent() {
        let target = Target::new("weasel", Alphabet::lowercase()).unwrap();
        let mut rng = create_rng(42);
        let population = random_population(30, &target, &mut rng);

        assert_eq!(population.len(), 30);
        for e in &population {
            assert_eq!(e.individual.len(), 6);
            assert_eq!(e.fitness, target.fitness(&e.individual));
        }
    }

    #[test]
    fn test_best_prefers_first_on_tie() {
        let population = Population::new(vec![
            entry("aa", 0),
            entry("bb", 2),
            entry("cc", 1),
            entry("dd", 2),
        ]);
        assert_eq!(population.best(), Some(&entry("bb", 2)));
    }

    #[test]
    fn test_best_of_empty_is_none() {
        assert_eq!(Population::new(Vec::new()).best(), None);
    }

    #[test]
    fn test_set_replaces_slot_only() {
        let mut population = Population::new(vec![entry("aa", 0), entry("bb", 0)]);
        population.set(1, entry("xy", 2));
        assert_eq!(population.get(0), &entry("aa", 0));
        assert_eq!(population.get(1), &entry("xy", 2));
        assert_eq!(population.len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        let mut population = Population::new(vec![entry("aa", 0)]);
        population.set(1, entry("bb", 0));
    }

    #[test]
    fn test_mean_fitness() {
        let population = Population::new(vec![entry("a", 1), entry("b", 0), entry("c", 2)]);
        assert!((population.mean_fitness() - 1.0).abs() < 1e-12);
        assert_eq!(Population::new(Vec::new()).mean_fitness(), 0.0);
    }
}
