//! Error type for the binary GA.

/// Errors raised by configuration validation and chromosome decoding.
///
/// Configuration variants are returned before any generation runs.
/// [`GaError::LengthMismatch`] signals an engine defect and aborts a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("population_size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),

    #[error("tournament_size must be in [2, {population}], got {size}")]
    InvalidTournamentSize { size: usize, population: usize },

    #[error("bits_per_param must be in [1, 32], got {bits}")]
    InvalidBitsPerParam { bits: usize },

    #[error("parameter_count must be at least 1")]
    InvalidParameterCount,

    #[error("chromosome length must be at least 2 for crossover, got {length}")]
    ChromosomeTooShort { length: usize },

    #[error("chromosome length {bits_per_param} x {parameter_count} overflows usize")]
    ChromosomeTooLong {
        bits_per_param: usize,
        parameter_count: usize,
    },

    #[error("invalid parameter bounds [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },

    #[error("reproduction plan has no recipes")]
    EmptyReproductionPlan,

    #[error("recipe share {index} has zero weight")]
    ZeroRecipeWeight { index: usize },

    #[error("chromosome length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
