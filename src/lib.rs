//! # potion-brew
//!
//! Rule engine for an elemental potion crafting mini-game.
//!
//! ## Pipeline
//!
//! On every change to the ingredient selection the host runs:
//!
//! 1. **Aggregate**: fold each ingredient's per-element
//!    `stat * multiplier + offset` transform, in selection order.
//! 2. **Classify**: bucket each stat into a tier `0..=5` and find the
//!    dominant elements (everything tied at the highest tier, or
//!    nothing if that tier is 0).
//! 3. **Resolve**: take the first catalog effect whose dominant set
//!    matches exactly and whose tier thresholds hold, then compute its
//!    short text.
//!
//! All of it is pure and synchronous. The only shared data is the
//! read-only catalog and ingredient registry built at startup.
//!
//! ## Modules
//!
//! - `core`: Elements, stat vectors, tiers, configuration
//! - `ingredients`: Ingredient definitions, registry, selections
//! - `effects`: Requirements, calculations, catalog, resolver
//! - `error`: Error types for loading and lookup

pub mod core;
pub mod ingredients;
pub mod effects;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Element, ElementInfo, ElementMap, ElementSet,
    IngredientStats, PotionStats, PotionTiers, StatTransform,
    TierRule, EngineConfig,
};

pub use crate::ingredients::{Ingredient, IngredientId, IngredientRegistry, Selection};

pub use crate::effects::{
    Brew, Calculation, CalculationContext, EffectCatalog, EffectId,
    EffectResolver, PotionEffect, Requirement, Resolution, Threshold,
};

pub use crate::error::{BrewError, CatalogError, ConfigError, RegistryError, SelectionError};
