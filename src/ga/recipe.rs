//! Reproduction recipes and the weighted plan that mixes them.
//!
//! A [`Recipe`] turns the current population into one offspring using
//! tournament selection and the bit-string operators. A
//! [`ReproductionPlan`] splits the non-elite slots of the next generation
//! between recipes in proportion to integer weights; rounding leftovers go
//! to the recipe listed last.
//!
//! ```
//! use u_bitga::ga::{Recipe, ReproductionPlan};
//!
//! let plan = ReproductionPlan::mixed();
//! assert_eq!(
//!     plan.allocate(12),
//!     vec![
//!         (Recipe::Crossover, 4),
//!         (Recipe::Mutation, 4),
//!         (Recipe::CrossoverMutation, 4),
//!     ]
//! );
//! ```

use super::error::GaError;
use super::operators::{flip_mutation, single_point_crossover};
use super::selection::tournament;
use super::types::{BinaryIndividual, Direction};
use rand::Rng;

/// One way of producing an offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recipe {
    /// Select two parents, cross them over, keep the first child.
    Crossover,
    /// Select one parent and flip one bit of a copy.
    Mutation,
    /// Crossover as above, then mutate the first child.
    CrossoverMutation,
}

impl Recipe {
    /// Produces one unevaluated offspring.
    pub fn produce<R: Rng>(
        self,
        population: &[BinaryIndividual],
        tournament_size: usize,
        direction: Direction,
        rng: &mut R,
    ) -> BinaryIndividual {
        match self {
            Recipe::Mutation => {
                let p = tournament(population, tournament_size, direction, rng);
                flip_mutation(&population[p], rng)
            }
            Recipe::Crossover => cross_first_child(population, tournament_size, direction, rng),
            Recipe::CrossoverMutation => {
                let child = cross_first_child(population, tournament_size, direction, rng);
                flip_mutation(&child, rng)
            }
        }
    }
}

fn cross_first_child<R: Rng>(
    population: &[BinaryIndividual],
    tournament_size: usize,
    direction: Direction,
    rng: &mut R,
) -> BinaryIndividual {
    let p1 = tournament(population, tournament_size, direction, rng);
    let p2 = tournament(population, tournament_size, direction, rng);
    let (child, _) = single_point_crossover(&population[p1], &population[p2], rng);
    child
}

/// A recipe with its integer weight in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeShare {
    pub recipe: Recipe,
    pub weight: u32,
}

/// Weighted list of recipes used to fill the non-elite slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReproductionPlan {
    shares: Vec<RecipeShare>,
}

impl Default for ReproductionPlan {
    fn default() -> Self {
        Self::mixed()
    }
}

impl ReproductionPlan {
    /// Builds a plan from weighted shares, in allocation order.
    pub fn new(shares: Vec<RecipeShare>) -> Self {
        Self { shares }
    }

    /// Every slot is a mutated copy of a tournament winner.
    pub fn mutation_only() -> Self {
        Self::new(vec![RecipeShare {
            recipe: Recipe::Mutation,
            weight: 1,
        }])
    }

    /// Equal thirds: crossover, mutation, crossover-then-mutation.
    pub fn mixed() -> Self {
        Self::new(vec![
            RecipeShare {
                recipe: Recipe::Crossover,
                weight: 1,
            },
            RecipeShare {
                recipe: Recipe::Mutation,
                weight: 1,
            },
            RecipeShare {
                recipe: Recipe::CrossoverMutation,
                weight: 1,
            },
        ])
    }

    /// Appends a recipe with the given weight.
    pub fn with_share(mut self, recipe: Recipe, weight: u32) -> Self {
        self.shares.push(RecipeShare { recipe, weight });
        self
    }

    /// The weighted recipes, in allocation order.
    pub fn shares(&self) -> &[RecipeShare] {
        &self.shares
    }

    /// Rejects empty plans and zero weights.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.shares.is_empty() {
            return Err(GaError::EmptyReproductionPlan);
        }
        if let Some(index) = self.shares.iter().position(|s| s.weight == 0) {
            return Err(GaError::ZeroRecipeWeight { index });
        }
        Ok(())
    }

    /// Splits `slots` between recipes, in plan order.
    ///
    /// Each recipe gets `floor(slots · weight / total)`; the remainder is
    /// added to the last recipe. The counts always sum to `slots` for a
    /// valid plan.
    pub fn allocate(&self, slots: usize) -> Vec<(Recipe, usize)> {
        let total: u64 = self.shares.iter().map(|s| u64::from(s.weight)).sum();
        if total == 0 {
            return Vec::new();
        }
        let mut counts: Vec<(Recipe, usize)> = self
            .shares
            .iter()
            .map(|s| {
                let n = slots as u64 * u64::from(s.weight) / total;
                (s.recipe, n as usize)
            })
            .collect();
        let assigned: usize = counts.iter().map(|(_, n)| n).sum();
        if let Some(last) = counts.last_mut() {
            last.1 += slots - assigned;
        }
        counts
    }

    /// Produces `slots` offspring from `population`.
    ///
    /// Offspring are grouped by recipe in plan order.
    pub fn reproduce<R: Rng>(
        &self,
        population: &[BinaryIndividual],
        slots: usize,
        tournament_size: usize,
        direction: Direction,
        rng: &mut R,
    ) -> Vec<BinaryIndividual> {
        let mut offspring = Vec::with_capacity(slots);
        for (recipe, count) in self.allocate(slots) {
            for _ in 0..count {
                offspring.push(recipe.produce(population, tournament_size, direction, rng));
            }
        }
        offspring
    }
}
