//! Least-squares fit of `y = sin(a·x + b)·cos(c·x)`.

use crate::ga::{Direction, GaConfig, Objective, ReproductionPlan};

/// Sampled `(x, y)` pairs for x = −1.0, −0.8, …, 6.0.
pub const CURVE_SAMPLES: [(f64, f64); 36] = [
    (-1.0, 0.59554),
    (-0.8, 0.58813),
    (-0.6, 0.64181),
    (-0.4, 0.68587),
    (-0.2, 0.44783),
    (0.0, 0.40836),
    (0.2, 0.38241),
    (0.4, -0.05933),
    (0.6, -0.12478),
    (0.8, -0.36847),
    (1.0, -0.39935),
    (1.2, -0.50881),
    (1.4, -0.63435),
    (1.6, -0.59979),
    (1.8, -0.64107),
    (2.0, -0.51808),
    (2.2, -0.38127),
    (2.4, -0.12349),
    (2.6, -0.09624),
    (2.8, 0.27893),
    (3.0, 0.48965),
    (3.2, 0.33089),
    (3.4, 0.70615),
    (3.6, 0.53342),
    (3.8, 0.43321),
    (4.0, 0.64790),
    (4.2, 0.48834),
    (4.4, 0.18440),
    (4.6, -0.02389),
    (4.8, -0.10261),
    (5.0, -0.33594),
    (5.2, -0.35101),
    (5.4, -0.62027),
    (5.6, -0.55719),
    (5.8, -0.66377),
    (6.0, -0.62740),
];

/// Sum of squared residuals of the model `sin(a·x + b)·cos(c·x)` over a
/// sample set. Parameters are `[a, b, c]`.
#[derive(Debug, Clone)]
pub struct CurveFitObjective {
    samples: Vec<(f64, f64)>,
}

impl Default for CurveFitObjective {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveFitObjective {
    /// Fits the bundled [`CURVE_SAMPLES`].
    pub fn new() -> Self {
        Self::with_samples(CURVE_SAMPLES.to_vec())
    }

    /// Fits an arbitrary `(x, y)` sample set.
    pub fn with_samples(samples: Vec<(f64, f64)>) -> Self {
        Self { samples }
    }

    /// The samples being fitted.
    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    /// Always 3: `[a, b, c]`.
    pub fn parameter_count(&self) -> usize {
        3
    }

    /// Model prediction at `x`.
    pub fn predict(params: &[f64], x: f64) -> f64 {
        let (a, b, c) = (params[0], params[1], params[2]);
        (x * a + b).sin() * (x * c).cos()
    }

    /// Population 13, 5 bits × 3 in `[0, 3]`, 100 iterations, tournament 3,
    /// mixed recipes.
    pub fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(13)
            .with_encoding(5, 3)
            .with_bounds(0.0, 3.0)
            .with_iterations(100)
            .with_tournament_size(3)
            .with_direction(Direction::Minimize)
            .with_reproduction(ReproductionPlan::mixed())
    }
}

impl Objective for CurveFitObjective {
    fn evaluate(&self, params: &[f64]) -> f64 {
        self.samples
            .iter()
            .map(|&(x, y)| {
                let r = y - Self::predict(params, x);
                r * r
            })
            .sum()
    }
}
