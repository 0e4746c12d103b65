//! Ingredient selections.
//!
//! A `Selection` is the ordered multiset of ingredients currently in
//! the cauldron. Order matters for aggregation because multipliers
//! scale whatever has been accumulated so far.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PotionStats;
use crate::error::SelectionError;

use super::definition::{Ingredient, IngredientId};
use super::registry::IngredientRegistry;

/// Ordered ingredient picks. Duplicates allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    picks: SmallVec<[IngredientId; 8]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ingredient.
    pub fn add(&mut self, id: IngredientId) {
        self.picks.push(id);
    }

    /// Append an ingredient (builder pattern).
    #[must_use]
    pub fn with(mut self, id: IngredientId) -> Self {
        self.add(id);
        self
    }

    /// Remove the most recently added copy of `id`.
    ///
    /// Returns false if `id` was not in the selection.
    pub fn remove_one(&mut self, id: IngredientId) -> bool {
        match self.picks.iter().rposition(|p| *p == id) {
            Some(pos) => {
                self.picks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every pick.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Number of picks, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Check if nothing has been picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// How many times `id` was picked.
    #[must_use]
    pub fn count_of(&self, id: IngredientId) -> usize {
        self.picks.iter().filter(|p| **p == id).count()
    }

    /// Iterate picks in selection order.
    pub fn iter(&self) -> impl Iterator<Item = IngredientId> + '_ {
        self.picks.iter().copied()
    }

    /// Look up every pick, in order.
    pub fn ingredients<'r>(
        &self,
        registry: &'r IngredientRegistry,
    ) -> Result<Vec<&'r Ingredient>, SelectionError> {
        self.iter()
            .map(|id| registry.get(id).ok_or(SelectionError::UnknownIngredient(id)))
            .collect()
    }

    /// Aggregate stats: start from zero and apply each pick in order.
    pub fn stats(&self, registry: &IngredientRegistry) -> Result<PotionStats, SelectionError> {
        let ingredients = self.ingredients(registry)?;
        Ok(PotionStats::zero().with_ingredients(ingredients.iter().map(|i| &i.stats)))
    }
}

impl FromIterator<IngredientId> for Selection {
    fn from_iter<I: IntoIterator<Item = IngredientId>>(iter: I) -> Self {
        Self {
            picks: iter.into_iter().collect(),
        }
    }
}
