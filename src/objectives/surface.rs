//! Multimodal 2-D surface.

use crate::ga::{Direction, GaConfig, Objective, ReproductionPlan};

/// `f(x1, x2) = sin(0.05·x1) + sin(0.05·x2) + 0.4·sin(0.15·x1)·sin(0.15·x2)`
///
/// On `[0, 100]²` the global maximum (≈ 2.4) sits near `(31.4, 31.4)`,
/// surrounded by weaker local peaks from the 0.15 frequency term.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceObjective;

impl SurfaceObjective {
    /// The surface has no parameters of its own.
    pub fn new() -> Self {
        Self
    }

    /// Always 2: `[x1, x2]`.
    pub fn parameter_count(&self) -> usize {
        2
    }

    /// Population 11, 5 bits × 2 in `[0, 100]`, 50 iterations, mutation only.
    ///
    /// Tournament size is `max(2, population / 10)`.
    pub fn config() -> GaConfig {
        let population_size = 11;
        GaConfig::default()
            .with_population_size(population_size)
            .with_encoding(5, 2)
            .with_bounds(0.0, 100.0)
            .with_iterations(50)
            .with_tournament_size((population_size / 10).max(2))
            .with_direction(Direction::Maximize)
            .with_reproduction(ReproductionPlan::mutation_only())
    }
}

impl Objective for SurfaceObjective {
    fn evaluate(&self, params: &[f64]) -> f64 {
        debug_assert_eq!(params.len(), self.parameter_count(), "expected [x1, x2]");
        let (x1, x2) = (params[0], params[1]);
        (x1 * 0.05).sin() + (x2 * 0.05).sin() + 0.4 * (x1 * 0.15).sin() * (x2 * 0.15).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaRunner, NullReporter};

    #[test]
    fn test_origin_is_zero() {
        assert_eq!(SurfaceObjective.evaluate(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_peak_value() {
        let x = std::f64::consts::PI * 10.0;
        let f = SurfaceObjective.evaluate(&[x, x]);
        assert!((f - 2.4).abs() < 1e-9, "got {f}");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "expected [x1, x2]")]
    fn test_wrong_parameter_count_panics() {
        SurfaceObjective.evaluate(&[1.0]);
    }

    #[test]
    fn test_preset_is_valid() {
        let config = SurfaceObjective::config();
        assert!(config.validate().is_ok());
        assert_eq!(config.tournament_size, 2);
        assert_eq!(config.parameter_count, SurfaceObjective.parameter_count());
    }

    #[test]
    fn test_preset_run() {
        let config = SurfaceObjective::config().with_seed(42);
        let result = GaRunner::new(config, SurfaceObjective, NullReporter)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.generations, 51);
        assert!(result.best_fitness >= result.history[0].best_fitness);
        assert!(result.best_params.iter().all(|x| (0.0..=100.0).contains(x)));
    }

    #[test]
    fn test_larger_run_finds_main_peak() {
        let config = SurfaceObjective::config()
            .with_population_size(40)
            .with_tournament_size(3)
            .with_iterations(100)
            .with_seed(42);
        let result = GaRunner::new(config, SurfaceObjective, NullReporter)
            .unwrap()
            .run()
            .unwrap();
        assert!(
            result.best_fitness > 2.0,
            "expected > 2.0, got {}",
            result.best_fitness
        );
    }
}
