//! The built-in prototype catalog.
//!
//! Incendiary and Restorative carry authored calculations. The other
//! entries are declared so they resolve correctly, but their text is
//! still `Unauthored`.

use crate::core::Element;
use crate::error::CatalogError;

use super::calculation::Calculation;
use super::catalog::EffectCatalog;
use super::effect::PotionEffect;
use super::requirement::Requirement;

/// Every built-in effect, in match order.
#[must_use]
pub fn prototype_effects() -> Vec<PotionEffect> {
    vec![
        PotionEffect::new("incendiary", "Incendiary", Requirement::single(Element::Fire))
            .with_potion_name("Incendiary Flask")
            .with_icon("/poke-potions/item_0020.png")
            .with_lore("instant damage")
            .with_description(
                "Apply to enemies to deal immediate damage.\n\n\
                 Elemental damage scales with the <b>strongest non-dominant element.</b>",
            )
            .with_calculation(Calculation::elemental_damage(Element::Fire)),
        PotionEffect::new("restorative", "Restorative", Requirement::single(Element::Water))
            .with_potion_name("Restorative Tonic")
            .with_icon("/poke-potions/item_0024.png")
            .with_lore("HP restoration")
            .with_description(
                "Restore health instantly. Healing scales with the sum of all element tiers.\n\n",
            )
            .with_calculation(Calculation::tier_sum_restore()),
        PotionEffect::new("fortifying", "Fortifying", Requirement::single(Element::Ground))
            .with_potion_name("Stoneskin Draught")
            .with_icon("/poke-potions/item_0031.png")
            .with_lore("damage reduction")
            .with_description("Harden the skin against incoming blows for a few turns."),
        PotionEffect::new("chilling", "Chilling", Requirement::single(Element::Ice))
            .with_potion_name("Frost Phial")
            .with_icon("/poke-potions/item_0027.png")
            .with_lore("slows enemies")
            .with_description("Shatter on enemies to slow them down."),
        PotionEffect::new("galvanic", "Galvanic", Requirement::single(Element::Electric))
            .with_potion_name("Spark Vial")
            .with_icon("/poke-potions/item_0029.png")
            .with_lore("paralysis")
            .with_description("Jolt enemies with a chance to leave them unable to act."),
        PotionEffect::new(
            "scalding",
            "Scalding",
            Requirement::dominant([Element::Fire, Element::Water])
                .with_threshold(Element::Fire, 2),
        )
        .with_potion_name("Scalding Mist")
        .with_icon("/poke-potions/item_0035.png")
        .with_lore("damage over time")
        .with_description("Douse enemies in boiling steam that burns over several turns."),
    ]
}

impl EffectCatalog {
    /// Catalog holding the built-in prototype effects.
    pub fn prototype() -> Result<Self, CatalogError> {
        Self::from_effects(prototype_effects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TierRule;

    #[test]
    fn test_prototype_is_valid() {
        let catalog = EffectCatalog::prototype().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.validate(&TierRule::STANDARD).is_ok());
    }

    #[test]
    fn test_prototype_order() {
        let catalog = EffectCatalog::prototype().unwrap();
        let ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["incendiary", "restorative", "fortifying", "chilling", "galvanic", "scalding"]
        );
    }

    #[test]
    fn test_dominant_sets_are_distinct() {
        let effects = prototype_effects();
        for (i, a) in effects.iter().enumerate() {
            for b in &effects[i + 1..] {
                assert_ne!(a.requirement.dominant, b.requirement.dominant, "{} / {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_entry_has_description() {
        for effect in prototype_effects() {
            assert!(!effect.description.is_empty(), "{} has no description", effect.id);
        }
    }
}
