//! Binary-encoded genetic algorithm for bounded real-valued parameter search.
//!
//! - **Genetic Algorithm ([`ga`])**: fixed-length bit-string chromosomes
//!   decoded into bounded reals, tournament selection, single-point
//!   crossover, single-bit mutation, and an elitist generational loop with
//!   a configurable mix of reproduction recipes.
//! - **Objectives ([`objectives`])**: ready-made fitness functions: a 2-D
//!   multimodal surface, a least-squares curve fit, and XOR weight tuning
//!   for a small bank of sigmoid neurons.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaRunner, MemoryReporter};
//! use u_bitga::objectives::CurveFitObjective;
//!
//! let config = CurveFitObjective::config().with_seed(42);
//! let mut runner = GaRunner::new(config, CurveFitObjective::new(), MemoryReporter::new()).unwrap();
//! let result = runner.run().unwrap();
//! assert_eq!(result.generations, 101);
//! ```
//!
//! # Architecture
//!
//! Runs are single-threaded and own all of their state: the random source
//! is created from the configured seed and threaded explicitly through
//! every stochastic operator, so concurrent runs only need separate
//! runners.

pub mod ga;
pub mod objectives;
pub mod random;
