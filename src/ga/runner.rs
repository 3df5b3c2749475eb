//! GA generational loop.
//!
//! [`GaRunner`] drives the run:
//! initialization → evaluation → report → (reproduction → elitist
//! replacement) → evaluation → …
//!
//! Generation `g` runs for `g = 0..=iterations`. After each evaluation the
//! runner reports, and unless `g == iterations` it builds
//! `population_size − 1` offspring from the reproduction plan and appends
//! the current best individual unchanged.

use super::codec::BinaryCodec;
use super::config::GaConfig;
use super::error::GaError;
use super::population::Population;
use super::report::{GenerationReporter, GenerationSummary};
use super::types::{BinaryIndividual, Objective, ParameterVector};
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the last evaluated generation.
    pub best: BinaryIndividual,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// `best` decoded into parameters.
    pub best_params: ParameterVector,

    /// Number of generations evaluated and reported.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Summary of every reported generation, in order.
    pub history: Vec<GenerationSummary>,
}

/// Executes the binary GA.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{Direction, GaConfig, GaRunner, NullReporter};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_encoding(8, 2)
///     .with_bounds(-5.0, 5.0)
///     .with_iterations(30)
///     .with_direction(Direction::Minimize)
///     .with_seed(42);
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
///
/// let mut runner = GaRunner::new(config, sphere, NullReporter).unwrap();
/// let result = runner.run().unwrap();
/// assert_eq!(result.generations, 31);
/// ```
pub struct GaRunner<O, P> {
    config: GaConfig,
    codec: BinaryCodec,
    objective: O,
    reporter: P,
}

impl<O: Objective, P: GenerationReporter> GaRunner<O, P> {
    /// Validates `config` and builds a runner.
    ///
    /// A rejected configuration never reaches initialization.
    pub fn new(config: GaConfig, objective: O, reporter: P) -> Result<Self, GaError> {
        config.validate()?;
        let codec = config.codec()?;
        Ok(Self {
            config,
            codec,
            objective,
            reporter,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The codec built from the configuration.
    pub fn codec(&self) -> &BinaryCodec {
        &self.codec
    }

    /// The progress reporter.
    pub fn reporter(&self) -> &P {
        &self.reporter
    }

    /// Consumes the runner and returns its reporter.
    pub fn into_reporter(self) -> P {
        self.reporter
    }

    /// Runs the GA to completion.
    pub fn run(&mut self) -> Result<GaResult, GaError> {
        self.run_with_cancel(None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked before every generation after the first. When it
    /// is set, the last reported generation is final.
    ///
    /// A decode failure aborts the run immediately; everything reported
    /// before it stands.
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let direction = self.config.direction;
        let population_size = self.config.population_size;

        // 1. Initialize population
        let mut population = Population::generate(
            population_size,
            self.codec.chromosome_length(),
            &mut rng,
        );

        let mut history = Vec::with_capacity(self.config.iterations.saturating_add(1).min(1024));
        let mut cancelled = false;
        let mut generation = 0usize;

        // 2. Generational loop
        let best = loop {
            debug_assert_eq!(population.len(), population_size);

            // Evaluate and report
            population.evaluate(&self.codec, &self.objective)?;
            let summary = population
                .summary(generation, direction)
                .expect("evaluated population must not be empty");
            self.reporter.report(&summary, &summary.progress_line());
            log::debug!(
                "generation {}: average={}, best={}",
                summary.generation,
                summary.average_fitness,
                summary.best_fitness
            );
            history.push(summary);

            let elite = population
                .best(direction)
                .expect("evaluated population must not be empty")
                .clone();

            if generation == self.config.iterations {
                break elite;
            }

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    log::warn!("run cancelled after generation {generation}");
                    cancelled = true;
                    break elite;
                }
            }

            // Reproduce, then carry the elite forward unchanged
            let mut next = self.config.reproduction.reproduce(
                population.individuals(),
                population_size - 1,
                self.config.tournament_size,
                direction,
                &mut rng,
            );
            next.push(elite.without_fitness());
            population = Population::from_individuals(next);
            generation += 1;
        };

        let best_fitness = best.fitness_or_worst(direction);
        let best_params = self.codec.decode(best.chromosome())?;
        log::info!(
            "finished after {} generations, best fitness {}",
            history.len(),
            best_fitness
        );

        Ok(GaResult {
            best,
            best_fitness,
            best_params,
            generations: history.len(),
            cancelled,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
