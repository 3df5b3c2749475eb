//! Binary-encoded Genetic Algorithm.
//!
//! Searches a bounded real-valued parameter space by evolving fixed-length
//! bit strings. Each chromosome is cut into equal slices that decode to one
//! parameter each; the objective is a black box over the decoded vector.
//!
//! # Core Traits
//!
//! - [`Objective`]: Deterministic fitness function over decoded parameters
//! - [`GenerationReporter`]: Sink for per-generation summaries
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population, encoding, bounds, direction)
//! - [`BinaryCodec`]: Bit slices → bounded reals
//! - [`ReproductionPlan`]: Weighted mix of [`Recipe`]s that fills each generation
//! - [`GaRunner`]: Executes the generational loop with elitism
//! - [`GaResult`]: Final best individual and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and single-bit flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod codec;
mod config;
mod error;
pub mod operators;
mod population;
mod recipe;
mod report;
mod runner;
mod selection;
mod types;

pub use codec::{BinaryCodec, MAX_BITS_PER_PARAM};
pub use config::GaConfig;
pub use error::GaError;
pub use population::Population;
pub use recipe::{Recipe, RecipeShare, ReproductionPlan};
pub use report::{GenerationReporter, GenerationSummary, LogReporter, MemoryReporter, NullReporter};
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{BinaryIndividual, Chromosome, Direction, Objective, ParameterVector};
