//! Core types for the binary GA.
//!
//! [`Chromosome`] and [`BinaryIndividual`] are the population members;
//! [`Objective`] is the contract between the engine and the black-box
//! fitness function; [`Direction`] fixes the comparison order everywhere.

use rand::Rng;

/// Decoded real-valued parameters, one entry per parameter slot.
pub type ParameterVector = Vec<f64>;

/// Optimization direction.
///
/// Determines which of two fitness values is better in selection,
/// elite extraction, and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher fitness is better.
    Maximize,
    /// Lower fitness is better.
    #[default]
    Minimize,
}

impl Direction {
    /// Returns `true` if `a` is strictly better than `b`.
    ///
    /// Strictness is what makes tie-breaking "first encountered wins".
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Maximize => a > b,
            Direction::Minimize => a < b,
        }
    }

    /// The worst possible fitness in this direction.
    ///
    /// Stands in for individuals that have not been evaluated yet.
    pub fn worst(self) -> f64 {
        match self {
            Direction::Maximize => f64::NEG_INFINITY,
            Direction::Minimize => f64::INFINITY,
        }
    }
}

/// A fixed-length bit string encoding one candidate solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Draws `length` bits independently with a fair coin per bit.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the bits, most significant bit of each slot first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Flips the bit at `index` in place.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub(crate) fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Chromosome) -> usize {
        assert_eq!(self.len(), other.len(), "chromosomes must have equal length");
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bits(bits)
    }
}

/// A chromosome plus its fitness for the current generation.
///
/// Fitness is `None` until the individual is evaluated. Individuals produced
/// by crossover or mutation always start unevaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryIndividual {
    chromosome: Chromosome,
    fitness: Option<f64>,
}

impl BinaryIndividual {
    /// Creates an unevaluated individual.
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: None,
        }
    }

    /// The individual's chromosome.
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Fitness from the most recent evaluation, if any.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Fitness, or the worst value in `direction` when unevaluated or NaN.
    pub fn fitness_or_worst(&self, direction: Direction) -> f64 {
        match self.fitness {
            Some(f) if !f.is_nan() => f,
            _ => direction.worst(),
        }
    }

    /// Stores the fitness computed for this generation.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Returns a copy with the same chromosome and no fitness.
    ///
    /// Used when carrying the elite into the next generation so that stale
    /// fitness is never read.
    pub fn without_fitness(&self) -> Self {
        Self::new(self.chromosome.clone())
    }
}

/// A black-box fitness function over decoded parameters.
///
/// Must be deterministic: evaluating the same parameters twice yields the
/// same score. The engine does not cache results.
///
/// Any `Fn(&[f64]) -> f64` closure is an objective:
///
/// ```
/// use u_bitga::ga::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
pub trait Objective {
    /// Scores a decoded parameter vector.
    fn evaluate(&self, params: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, params: &[f64]) -> f64 {
        self(params)
    }
}
