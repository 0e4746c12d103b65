//! Effect system: the rule table that names a potion.
//!
//! - `Requirement`: Exact dominant set plus minimum tiers
//! - `Calculation`: How an effect computes its short text
//! - `PotionEffect`: A catalog record tying the two to flavor text
//! - `EffectCatalog`: Ordered, validated list of effects and sentinels
//! - `EffectResolver`: Runs stats through the catalog
//!
//! ## Design Philosophy
//!
//! The catalog is data. Adding an effect means appending a record,
//! never adding a branch to the resolver. Calculations are a closed
//! enum so catalogs can be loaded from JSON as well as built in code.

mod builtin;
mod calculation;
mod catalog;
mod effect;
mod requirement;
mod resolver;

pub use builtin::prototype_effects;
pub use calculation::{Calculation, CalculationContext};
pub use catalog::EffectCatalog;
pub use effect::{EffectId, PotionEffect};
pub use requirement::{Requirement, Threshold};
pub use resolver::{Brew, EffectResolver, Resolution};
