//! Potion effect definitions.
//!
//! A `PotionEffect` is a static catalog record: flavor text for the
//! presentation layer, a `Requirement` deciding when it applies, and a
//! `Calculation` producing its short description.

use serde::{Deserialize, Serialize};

use super::calculation::Calculation;
use super::requirement::Requirement;

/// Identifier for a potion effect.
///
/// `new` and `unknown` belong to the sentinel effects and cannot be
/// used by catalog entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(pub String);

impl EffectId {
    /// Id of the sentinel shown before any ingredient is picked.
    pub const NEW: &'static str = "new";

    /// Id of the sentinel shown when nothing in the catalog matches.
    pub const UNKNOWN: &'static str = "unknown";

    /// Create a new effect ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this id belongs to a sentinel.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.0 == Self::NEW || self.0 == Self::UNKNOWN
    }
}

impl From<&str> for EffectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for EffectId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EffectId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static effect definition.
///
/// ## Example
///
/// ```
/// use potion_brew::core::Element;
/// use potion_brew::effects::{Calculation, PotionEffect, Requirement};
///
/// let effect = PotionEffect::new("incendiary", "Incendiary", Requirement::single(Element::Fire))
///     .with_lore("instant damage")
///     .with_calculation(Calculation::elemental_damage(Element::Fire));
///
/// assert_eq!(effect.id, "incendiary");
/// assert_eq!(effect.potion_name, "Incendiary Potion");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PotionEffect {
    /// Unique identifier.
    pub id: EffectId,

    /// Effect name, e.g. "Incendiary".
    pub display_name: String,

    /// Name of a potion carrying this effect.
    #[serde(default)]
    pub potion_name: String,

    /// Icon asset path.
    #[serde(default)]
    pub icon: String,

    /// One-line flavor.
    #[serde(default)]
    pub lore: String,

    /// Long-form description. May contain inline markup.
    #[serde(default)]
    pub description: String,

    /// When this effect applies.
    pub requirement: Requirement,

    /// How the short effect text is derived.
    #[serde(default)]
    pub calculation: Calculation,
}

impl PotionEffect {
    /// Create an effect with no flavor text and no calculation.
    ///
    /// The potion name defaults to "<display name> Potion".
    pub fn new(
        id: impl Into<EffectId>,
        display_name: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        let display_name = display_name.into();
        Self {
            id: id.into(),
            potion_name: format!("{display_name} Potion"),
            display_name,
            icon: String::new(),
            lore: String::new(),
            description: String::new(),
            requirement,
            calculation: Calculation::Unauthored,
        }
    }

    /// Sentinel shown while the selection is empty.
    #[must_use]
    pub fn new_potion() -> Self {
        Self::new(EffectId::NEW, "New Potion", Requirement::default())
            .with_potion_name("New Potion")
            .with_icon("/poke-potions/item_0393.png")
            .with_lore(". . .")
            .with_description(
                "Click on ingredients on the right to add them to the potion. \n\n \
                 <em>The white dots on the stat bars below are tier thresholds. \
                 <b>the elements with the highest tier</b> determine the potion effect.</em>",
            )
    }

    /// Sentinel shown when no catalog entry matches.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(EffectId::UNKNOWN, ". . .", Requirement::default())
            .with_potion_name(". . .")
            .with_icon("/poke-potions/item_0393.png")
            .with_lore(". . .")
            .with_description("No known effect")
    }

    /// Set the potion name (builder pattern).
    #[must_use]
    pub fn with_potion_name(mut self, name: impl Into<String>) -> Self {
        self.potion_name = name.into();
        self
    }

    /// Set the icon path (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the lore line (builder pattern).
    #[must_use]
    pub fn with_lore(mut self, lore: impl Into<String>) -> Self {
        self.lore = lore.into();
        self
    }

    /// Set the long description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the calculation (builder pattern).
    #[must_use]
    pub fn with_calculation(mut self, calculation: Calculation) -> Self {
        self.calculation = calculation;
        self
    }

    /// Check if this is one of the two sentinel effects.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.id.is_reserved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;

    #[test]
    fn test_sentinels_are_distinct() {
        let new = PotionEffect::new_potion();
        let unknown = PotionEffect::unknown();

        assert_ne!(new.id, unknown.id);
        assert!(new.is_sentinel());
        assert!(unknown.is_sentinel());
        assert_eq!(new.display_name, "New Potion");
        assert_eq!(unknown.description, "No known effect");
    }

    #[test]
    fn test_reserved_ids() {
        assert!(EffectId::new("new").is_reserved());
        assert!(EffectId::new("unknown").is_reserved());
        assert!(!EffectId::new("incendiary").is_reserved());
    }

    #[test]
    fn test_builder() {
        let effect = PotionEffect::new("restorative", "Restorative", Requirement::single(Element::Water))
            .with_potion_name("Tonic")
            .with_icon("/poke-potions/item_0024.png")
            .with_calculation(Calculation::tier_sum_restore());

        assert_eq!(effect.potion_name, "Tonic");
        assert_eq!(effect.icon, "/poke-potions/item_0024.png");
        assert_eq!(effect.calculation, Calculation::tier_sum_restore());
        assert!(!effect.is_sentinel());
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{
            "id": "frostbite",
            "display_name": "Frostbite",
            "requirement": { "dominant": ["ice"] }
        }"#;
        let effect: PotionEffect = serde_json::from_str(json).unwrap();

        assert_eq!(effect.id, "frostbite");
        assert_eq!(effect.requirement, Requirement::single(Element::Ice));
        assert_eq!(effect.calculation, Calculation::Unauthored);
        assert_eq!(effect.potion_name, "");
    }
}
