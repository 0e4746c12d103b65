//! Ingredient registry for definition lookup.
//!
//! The `IngredientRegistry` stores every ingredient the picker can
//! offer. Lookup is by `IngredientId`; iteration follows registration
//! order so the picker can list ingredients stably.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::RegistryError;

use super::definition::{Ingredient, IngredientId};

/// Registry of ingredient definitions.
///
/// ## Example
///
/// ```
/// use potion_brew::core::Element;
/// use potion_brew::ingredients::{Ingredient, IngredientId, IngredientRegistry};
///
/// let mut registry = IngredientRegistry::new();
/// registry
///     .register(Ingredient::new(IngredientId::new(1), "Ember Moss").with_stat(Element::Fire, 25.0, 1.0))
///     .unwrap();
///
/// let found = registry.get(IngredientId::new(1)).unwrap();
/// assert_eq!(found.name, "Ember Moss");
/// ```
#[derive(Clone, Debug, Default)]
pub struct IngredientRegistry {
    ingredients: Vec<Ingredient>,
    index: FxHashMap<IngredientId, usize>,
}

impl IngredientRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of ingredients.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let ingredients: Vec<Ingredient> = serde_json::from_str(json)?;
        let registry = Self::from_ingredients(ingredients)?;
        debug!(count = registry.len(), "loaded ingredient registry");
        Ok(registry)
    }

    /// Build a registry from ingredients, rejecting duplicate ids.
    pub fn from_ingredients(
        ingredients: impl IntoIterator<Item = Ingredient>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for ingredient in ingredients {
            registry.register(ingredient)?;
        }
        Ok(registry)
    }

    /// Register an ingredient definition.
    pub fn register(&mut self, ingredient: Ingredient) -> Result<(), RegistryError> {
        if self.index.contains_key(&ingredient.id) {
            warn!(id = %ingredient.id, name = %ingredient.name, "duplicate ingredient id");
            return Err(RegistryError::DuplicateId(ingredient.id));
        }
        self.index.insert(ingredient.id, self.ingredients.len());
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Get an ingredient by ID.
    #[must_use]
    pub fn get(&self, id: IngredientId) -> Option<&Ingredient> {
        self.index.get(&id).map(|&i| &self.ingredients[i])
    }

    /// Check if an ingredient ID is registered.
    #[must_use]
    pub fn contains(&self, id: IngredientId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Iterate over ingredients in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    /// Find ingredients matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Ingredient>
    where
        F: Fn(&Ingredient) -> bool,
    {
        self.ingredients.iter().filter(move |i| predicate(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;

    #[test]
    fn test_register_and_get() {
        let mut registry = IngredientRegistry::new();
        registry
            .register(Ingredient::new(IngredientId::new(1), "Test Herb"))
            .unwrap();

        let found = registry.get(IngredientId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Herb");

        assert!(registry.get(IngredientId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = IngredientRegistry::new();
        registry
            .register(Ingredient::new(IngredientId::new(1), "A"))
            .unwrap();

        let err = registry
            .register(Ingredient::new(IngredientId::new(1), "B"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == IngredientId::new(1)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(IngredientId::new(1)).unwrap().name, "A");
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let registry = IngredientRegistry::from_ingredients([
            Ingredient::new(IngredientId::new(5), "E"),
            Ingredient::new(IngredientId::new(2), "B"),
            Ingredient::new(IngredientId::new(9), "I"),
        ])
        .unwrap();

        let names: Vec<_> = registry.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["E", "B", "I"]);
    }

    #[test]
    fn test_find_with_predicate() {
        let registry = IngredientRegistry::from_ingredients([
            Ingredient::new(IngredientId::new(1), "Ember").with_stat(Element::Fire, 20.0, 1.0),
            Ingredient::new(IngredientId::new(2), "Kelp").with_stat(Element::Water, 20.0, 1.0),
        ])
        .unwrap();

        let fiery: Vec<_> = registry
            .find(|i| i.stats[Element::Fire].offset > 0.0)
            .collect();
        assert_eq!(fiery.len(), 1);
        assert_eq!(fiery[0].name, "Ember");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": 1, "name": "Ember", "icon": "/ing/ember.png", "stats": { "fire": [20, 1] } },
            { "id": 2, "name": "Kelp", "stats": { "water": [20, 1] } }
        ]"#;
        let registry = IngredientRegistry::from_json(json).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(IngredientId::new(2)));
        assert_eq!(registry.get(IngredientId::new(1)).unwrap().icon, "/ing/ember.png");
    }

    #[test]
    fn test_from_json_duplicate() {
        let json = r#"[ { "id": 1, "name": "A" }, { "id": 1, "name": "B" } ]"#;
        assert!(matches!(
            IngredientRegistry::from_json(json),
            Err(RegistryError::DuplicateId(_))
        ));
    }
}
