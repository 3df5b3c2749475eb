//! Population management and per-generation evaluation.

use super::codec::BinaryCodec;
use super::error::GaError;
use super::report::GenerationSummary;
use super::types::{BinaryIndividual, Chromosome, Direction, Objective};
use rand::Rng;
use std::ops::Index;

/// An ordered, fixed-size collection of individuals for one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<BinaryIndividual>,
}

impl Population {
    /// Creates `size` random individuals of `chromosome_length` bits each.
    ///
    /// All individuals start unevaluated.
    pub fn generate<R: Rng>(size: usize, chromosome_length: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| BinaryIndividual::new(Chromosome::random(chromosome_length, rng)))
            .collect();
        Self { individuals }
    }

    /// Wraps an existing set of individuals.
    pub fn from_individuals(individuals: Vec<BinaryIndividual>) -> Self {
        Self { individuals }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if there are no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individuals as a slice.
    pub fn individuals(&self) -> &[BinaryIndividual] {
        &self.individuals
    }

    /// Iterates over the individuals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BinaryIndividual> {
        self.individuals.iter()
    }

    /// Decodes and scores every individual, overwriting any previous fitness.
    ///
    /// Stops at the first decode failure; individuals after it keep their
    /// old state, but the run is aborted by the caller anyway.
    pub fn evaluate<O: Objective + ?Sized>(
        &mut self,
        codec: &BinaryCodec,
        objective: &O,
    ) -> Result<(), GaError> {
        for ind in &mut self.individuals {
            let params = codec.decode(ind.chromosome())?;
            ind.set_fitness(objective.evaluate(&params));
        }
        Ok(())
    }

    /// Index of the best individual; the first one wins ties.
    ///
    /// Unevaluated and NaN fitness rank as worst. Returns `None` for an
    /// empty population.
    pub fn best_index(&self, direction: Direction) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, ind) in self.individuals.iter().enumerate() {
            let f = ind.fitness_or_worst(direction);
            match best {
                Some((_, bf)) if !direction.is_better(f, bf) => {}
                _ => best = Some((i, f)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// The best individual; the first one wins ties.
    pub fn best(&self, direction: Direction) -> Option<&BinaryIndividual> {
        self.best_index(direction).map(|i| &self.individuals[i])
    }

    /// Mean fitness over evaluated individuals, or `None` if none are.
    pub fn average_fitness(&self) -> Option<f64> {
        let (sum, count) = self
            .individuals
            .iter()
            .filter_map(BinaryIndividual::fitness)
            .fold((0.0, 0usize), |(s, c), f| (s + f, c + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Average and best fitness for reporting.
    ///
    /// Returns `None` if the population is empty or unevaluated.
    pub fn summary(&self, generation: usize, direction: Direction) -> Option<GenerationSummary> {
        let average_fitness = self.average_fitness()?;
        let best_fitness = self.best(direction)?.fitness()?;
        Some(GenerationSummary {
            generation,
            average_fitness,
            best_fitness,
        })
    }
}

impl Index<usize> for Population {
    type Output = BinaryIndividual;

    fn index(&self, index: usize) -> &BinaryIndividual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a BinaryIndividual;
    type IntoIter = std::slice::Iter<'a, BinaryIndividual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn scored(fitnesses: &[f64]) -> Population {
        Population::from_individuals(
            fitnesses
                .iter()
                .map(|&f| {
                    let mut ind = BinaryIndividual::new(Chromosome::from_bits(vec![true, false]));
                    ind.set_fitness(f);
                    ind
                })
                .collect(),
        )
    }

    #[test]
    fn test_generate_shape() {
        let mut rng = create_rng(42);
        let pop = Population::generate(13, 15, &mut rng);
        assert_eq!(pop.len(), 13);
        assert!(pop.iter().all(|ind| ind.chromosome().len() == 15));
        assert!(pop.iter().all(|ind| ind.fitness().is_none()));
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let a = Population::generate(10, 20, &mut create_rng(5));
        let b = Population::generate(10, 20, &mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluate_sets_every_fitness() {
        let mut rng = create_rng(42);
        let codec = BinaryCodec::new(4, 2, 0.0, 15.0).unwrap();
        let mut pop = Population::generate(6, 8, &mut rng);
        let sum = |p: &[f64]| p.iter().sum::<f64>();
        pop.evaluate(&codec, &sum).unwrap();
        for ind in &pop {
            let params = codec.decode(ind.chromosome()).unwrap();
            let expected = sum(params.as_slice());
            assert_eq!(ind.fitness(), Some(expected));
        }
    }

    #[test]
    fn test_evaluate_overwrites_stale_fitness() {
        let codec = BinaryCodec::new(2, 1, 0.0, 3.0).unwrap();
        let mut ind = BinaryIndividual::new(Chromosome::from_bits(vec![true, true]));
        ind.set_fitness(-100.0);
        let mut pop = Population::from_individuals(vec![ind]);
        pop.evaluate(&codec, &|p: &[f64]| p[0]).unwrap();
        assert_eq!(pop[0].fitness(), Some(3.0));
    }

    #[test]
    fn test_evaluate_rejects_wrong_length() {
        let codec = BinaryCodec::new(4, 2, 0.0, 15.0).unwrap();
        let mut pop = Population::generate(3, 7, &mut create_rng(1));
        let err = pop.evaluate(&codec, &|_: &[f64]| 0.0).unwrap_err();
        assert_eq!(
            err,
            GaError::LengthMismatch {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn test_best_index_first_wins_ties() {
        let pop = scored(&[3.0, 1.0, 1.0, 2.0]);
        assert_eq!(pop.best_index(Direction::Minimize), Some(1));
        let pop = scored(&[3.0, 7.0, 1.0, 7.0]);
        assert_eq!(pop.best_index(Direction::Maximize), Some(1));
    }

    #[test]
    fn test_best_index_skips_nan() {
        let pop = scored(&[f64::NAN, 3.0, 1.0]);
        assert_eq!(pop.best_index(Direction::Minimize), Some(2));
        assert_eq!(pop.best_index(Direction::Maximize), Some(1));
        assert_eq!(pop.best(Direction::Minimize).and_then(|b| b.fitness()), Some(1.0));
    }

    #[test]
    fn test_best_index_empty() {
        let pop = Population::from_individuals(vec![]);
        assert_eq!(pop.best_index(Direction::Minimize), None);
        assert_eq!(pop.average_fitness(), None);
    }

    #[test]
    fn test_summary() {
        let pop = scored(&[1.0, 2.0, 6.0]);
        let s = pop.summary(4, Direction::Maximize).unwrap();
        assert_eq!(s.generation, 4);
        assert!((s.average_fitness - 3.0).abs() < 1e-12);
        assert_eq!(s.best_fitness, 6.0);
    }

    #[test]
    fn test_summary_unevaluated_is_none() {
        let pop = Population::generate(3, 4, &mut create_rng(1));
        assert!(pop.summary(0, Direction::Minimize).is_none());
    }
}
