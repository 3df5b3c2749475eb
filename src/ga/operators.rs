//! Bit-string variation operators.
//!
//! Both operators are pure with respect to their inputs: parents are
//! borrowed, offspring are fresh [`BinaryIndividual`]s with no fitness.
//!
//! - [`single_point_crossover`]: exchange tails after one cut point — O(n)
//! - [`flip_mutation`]: copy and invert exactly one bit — O(n) for the copy
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{BinaryIndividual, Chromosome};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Chooses a cut point uniformly in `[1, n − 1]`. The first child takes
/// `parent_a` before the cut and `parent_b` from the cut onward; the second
/// child is the complement.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 bits.
pub fn single_point_crossover<R: Rng>(
    parent_a: &BinaryIndividual,
    parent_b: &BinaryIndividual,
    rng: &mut R,
) -> (BinaryIndividual, BinaryIndividual) {
    let a = parent_a.chromosome().bits();
    let b = parent_b.chromosome().bits();
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 bits");

    let cut = rng.random_range(1..n);
    let (child_a, child_b) = cross_at(a, b, cut);
    (
        BinaryIndividual::new(child_a),
        BinaryIndividual::new(child_b),
    )
}

/// Build both children for a fixed cut point.
fn cross_at(a: &[bool], b: &[bool], cut: usize) -> (Chromosome, Chromosome) {
    let mut child_a = Vec::with_capacity(a.len());
    child_a.extend_from_slice(&a[..cut]);
    child_a.extend_from_slice(&b[cut..]);

    let mut child_b = Vec::with_capacity(b.len());
    child_b.extend_from_slice(&b[..cut]);
    child_b.extend_from_slice(&a[cut..]);

    (Chromosome::from_bits(child_a), Chromosome::from_bits(child_b))
}

// ============================================================================
// Mutation
// ============================================================================

/// Single-bit flip mutation.
///
/// Copies the parent's chromosome, inverts one uniformly chosen bit, and
/// returns a new unevaluated individual. The parent is left untouched so it
/// can be selected again in the same generation.
///
/// # Panics
/// Panics if the chromosome is empty.
pub fn flip_mutation<R: Rng>(parent: &BinaryIndividual, rng: &mut R) -> BinaryIndividual {
    let n = parent.chromosome().len();
    assert!(n > 0, "cannot mutate an empty chromosome");

    let mut chromosome = parent.chromosome().clone();
    chromosome.flip(rng.random_range(0..n));
    BinaryIndividual::new(chromosome)
}

// ============================================================================
// Tests
// ============================================================================
