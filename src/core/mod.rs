//! Core engine types: elements, stat vectors, tiers, configuration.
//!
//! Everything here is pure data plus pure functions over it.
//! Nothing in this module knows about ingredients or effects.

pub mod element;
pub mod stats;
pub mod tiers;
pub mod config;

pub use element::{Element, ElementInfo, ElementMap, ElementSet};
pub use stats::{IngredientStats, PotionStats, StatTransform};
pub use tiers::{PotionTiers, TierRule};
pub use config::EngineConfig;
