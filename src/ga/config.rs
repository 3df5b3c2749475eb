//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. It is validated once, when
//! the runner is built, and never changes afterwards.

use super::codec::BinaryCodec;
use super::error::GaError;
use super::recipe::ReproductionPlan;
use super::types::Direction;

/// Configuration for the binary Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::{Direction, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.iterations, 100);
/// assert_eq!(config.direction, Direction::Minimize);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{Direction, GaConfig, ReproductionPlan};
///
/// let config = GaConfig::default()
///     .with_population_size(13)
///     .with_encoding(5, 3)
///     .with_bounds(0.0, 3.0)
///     .with_tournament_size(3)
///     .with_direction(Direction::Minimize)
///     .with_reproduction(ReproductionPlan::mixed())
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation, elite included.
    pub population_size: usize,

    /// Width of each parameter slice in bits (1–32).
    pub bits_per_param: usize,

    /// Number of parameters encoded in a chromosome.
    pub parameter_count: usize,

    /// Lower bound shared by all parameters.
    pub min_value: f64,

    /// Upper bound shared by all parameters.
    pub max_value: f64,

    /// Index of the last generation. The run reports `iterations + 1`
    /// generations; `0` means evaluate the initial population only.
    pub iterations: usize,

    /// Individuals drawn per tournament, in `[2, population_size]`.
    pub tournament_size: usize,

    /// Whether higher or lower fitness is better.
    pub direction: Direction,

    /// How the non-elite slots of each new generation are filled.
    pub reproduction: ReproductionPlan,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            bits_per_param: 16,
            parameter_count: 1,
            min_value: 0.0,
            max_value: 1.0,
            iterations: 100,
            tournament_size: 3,
            direction: Direction::Minimize,
            reproduction: ReproductionPlan::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets slice width and parameter count.
    pub fn with_encoding(mut self, bits_per_param: usize, parameter_count: usize) -> Self {
        self.bits_per_param = bits_per_param;
        self.parameter_count = parameter_count;
        self
    }

    /// Sets the parameter bounds.
    pub fn with_bounds(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets the index of the last generation.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the reproduction plan.
    pub fn with_reproduction(mut self, plan: ReproductionPlan) -> Self {
        self.reproduction = plan;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total chromosome length in bits, or `None` if it overflows `usize`.
    pub fn chromosome_length(&self) -> Option<usize> {
        self.bits_per_param.checked_mul(self.parameter_count)
    }

    /// Builds the codec described by this configuration.
    pub fn codec(&self) -> Result<BinaryCodec, GaError> {
        BinaryCodec::new(
            self.bits_per_param,
            self.parameter_count,
            self.min_value,
            self.max_value,
        )
    }

    /// Validates the configuration.
    ///
    /// Values are never clamped: anything out of range is an error.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        if self.tournament_size < 2 || self.tournament_size > self.population_size {
            return Err(GaError::InvalidTournamentSize {
                size: self.tournament_size,
                population: self.population_size,
            });
        }
        let length = self.codec()?.chromosome_length();
        if length < 2 {
            return Err(GaError::ChromosomeTooShort { length });
        }
        self.reproduction.validate()?;
        Ok(())
    }
}
