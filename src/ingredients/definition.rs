//! Ingredient definitions - static ingredient data.
//!
//! An `Ingredient` pairs display metadata with the per-element
//! transforms it applies to a potion's stats.

use serde::{Deserialize, Serialize};

use crate::core::{Element, IngredientStats, StatTransform};

/// Unique identifier for an ingredient definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub u32);

impl IngredientId {
    /// Create a new ingredient ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ingredient({})", self.0)
    }
}

/// Static ingredient definition.
///
/// ## Example
///
/// ```
/// use potion_brew::core::Element;
/// use potion_brew::ingredients::{Ingredient, IngredientId};
///
/// let ember = Ingredient::new(IngredientId::new(1), "Ember Moss")
///     .with_stat(Element::Fire, 25.0, 1.0)
///     .with_stat(Element::Ice, 0.0, 0.5);
///
/// assert_eq!(ember.stats[Element::Fire].offset, 25.0);
/// assert_eq!(ember.stats[Element::Ice].multiplier, 0.5);
/// assert_eq!(ember.stats[Element::Water].multiplier, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier.
    pub id: IngredientId,

    /// Name shown in the ingredient picker.
    pub name: String,

    /// Icon asset path.
    #[serde(default)]
    pub icon: String,

    /// Transform per element. Elements left out are identity.
    #[serde(default)]
    pub stats: IngredientStats,
}

impl Ingredient {
    /// Create an ingredient that leaves every stat unchanged.
    #[must_use]
    pub fn new(id: IngredientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: String::new(),
            stats: IngredientStats::default(),
        }
    }

    /// Set the icon path (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the transform for one element (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, element: Element, offset: f64, multiplier: f64) -> Self {
        self.stats[element] = StatTransform::new(offset, multiplier);
        self
    }
}
