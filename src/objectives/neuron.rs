//! XOR approximation with a bank of three sigmoid neurons.
//!
//! Each neuron sees `[x1, x2, 1]` through its own three weights; the network
//! output is the mean of the three activations. The objective is the sum of
//! squared errors over the XOR truth table.

use crate::ga::{Direction, GaConfig, Objective, ReproductionPlan};

const NEURONS: usize = 3;
const INPUTS: usize = 3;

/// XOR truth table with the bias input appended: `([x1, x2, 1], target)`.
pub const XOR_TABLE: [([f64; INPUTS], f64); 4] = [
    ([0.0, 0.0, 1.0], 0.0),
    ([0.0, 1.0, 1.0], 1.0),
    ([1.0, 0.0, 1.0], 1.0),
    ([1.0, 1.0, 1.0], 0.0),
];

/// Weights are laid out neuron by neuron: `w[n·3 + i]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeuronObjective;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl NeuronObjective {
    /// The network shape is fixed; there is nothing to configure.
    pub fn new() -> Self {
        Self
    }

    /// Always 9: three weights for each of three neurons.
    pub fn parameter_count(&self) -> usize {
        NEURONS * INPUTS
    }

    /// Mean activation of the neuron bank for one input row.
    pub fn predict(weights: &[f64], input: &[f64; INPUTS]) -> f64 {
        let total: f64 = weights
            .chunks_exact(INPUTS)
            .take(NEURONS)
            .map(|w| sigmoid(w.iter().zip(input).map(|(w, x)| w * x).sum()))
            .sum();
        total / NEURONS as f64
    }

    /// Population 13, 8 bits × 9 in `[-10, 10]`, 100 iterations,
    /// tournament 3, mixed recipes.
    pub fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(13)
            .with_encoding(8, NEURONS * INPUTS)
            .with_bounds(-10.0, 10.0)
            .with_iterations(100)
            .with_tournament_size(3)
            .with_direction(Direction::Minimize)
            .with_reproduction(ReproductionPlan::mixed())
    }
}

impl Objective for NeuronObjective {
    fn evaluate(&self, params: &[f64]) -> f64 {
        debug_assert_eq!(
            params.len(),
            self.parameter_count(),
            "expected {NEURONS} x {INPUTS} weights"
        );
        XOR_TABLE
            .iter()
            .map(|(input, target)| {
                let e = Self::predict(params, input) - target;
                e * e
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaRunner, NullReporter};

    #[test]
    fn test_zero_weights() {
        // Every neuron outputs 0.5, so each row is off by 0.5
        let err = NeuronObjective.evaluate(&[0.0; 9]);
        assert!((err - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_saturates() {
        let high = [10.0; 9];
        let p = NeuronObjective::predict(&high, &[1.0, 1.0, 1.0]);
        assert!(p > 0.999);
        let low = [-10.0; 9];
        let p = NeuronObjective::predict(&low, &[1.0, 1.0, 1.0]);
        assert!(p < 0.001);
    }

    #[test]
    fn test_error_is_bounded() {
        // Outputs lie in (0, 1), so each row contributes less than 1
        for w in [[10.0; 9], [-10.0; 9], [3.0; 9]] {
            let err = NeuronObjective.evaluate(&w);
            assert!((0.0..4.0).contains(&err));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "expected 3 x 3 weights")]
    fn test_short_weight_vector_panics() {
        NeuronObjective.evaluate(&[0.0; 6]);
    }

    #[test]
    fn test_preset_is_valid() {
        let config = NeuronObjective::config();
        assert!(config.validate().is_ok());
        assert_eq!(config.chromosome_length(), Some(72));
        assert_eq!(config.parameter_count, NeuronObjective.parameter_count());
    }

    #[test]
    fn test_preset_run_improves() {
        let config = NeuronObjective::config().with_seed(42);
        let result = GaRunner::new(config, NeuronObjective, NullReporter)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.generations, 101);
        assert!(result.best_fitness <= result.history[0].best_fitness);
        assert_eq!(result.best_params.len(), 9);
    }
}
