//! Random source construction.
//!
//! Every stochastic operation in the crate takes an explicit `&mut R: Rng`.
//! Runs own their generator; nothing here is process-wide.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded random number generator.
///
/// Two generators created from the same seed produce the same stream,
/// which is what makes [`GaRunner`](crate::ga::GaRunner) runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
