//! Ingredient system: definitions, registry, and selections.
//!
//! ## Key Types
//!
//! - `IngredientId`: Identifier for ingredient definitions
//! - `Ingredient`: Static ingredient data with per-element transforms
//! - `IngredientRegistry`: Ingredient definition lookup
//! - `Selection`: Ordered picks that aggregate into potion stats

pub mod definition;
pub mod registry;
pub mod selection;

pub use definition::{Ingredient, IngredientId};
pub use registry::IngredientRegistry;
pub use selection::Selection;
