//! Tournament selection.
//!
//! Draws `k` individuals uniformly **with replacement** and returns the
//! best under the run's [`Direction`]. Ties go to the first draw.
//!
//! Higher `k` = stronger selection pressure.
//! - k=1: uniform random choice (no pressure)
//! - k=2: light pressure
//! - k=3-5: moderate pressure
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{BinaryIndividual, Direction};
use rand::Rng;

/// Selects a parent index by tournament.
///
/// Unevaluated and NaN individuals compete with the worst possible fitness.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(
    population: &[BinaryIndividual],
    k: usize,
    direction: Direction,
    rng: &mut R,
) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    let mut best_fitness = population[best_idx].fitness_or_worst(direction);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        let fitness = population[idx].fitness_or_worst(direction);
        if direction.is_better(fitness, best_fitness) {
            best_idx = idx;
            best_fitness = fitness;
        }
    }
    best_idx
}
