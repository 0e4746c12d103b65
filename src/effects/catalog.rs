//! Effect catalog.
//!
//! The catalog is the ordered rule table. Matching scans it front to
//! back and stops at the first entry whose requirement holds, so
//! declaration order breaks ties between entries with the same
//! dominant set.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{ElementSet, PotionTiers, TierRule};
use crate::error::CatalogError;

use super::effect::{EffectId, PotionEffect};

/// Ordered, validated list of potion effects plus the two sentinels.
///
/// ## Example
///
/// ```
/// use potion_brew::core::Element;
/// use potion_brew::effects::{EffectCatalog, PotionEffect, Requirement};
///
/// let mut catalog = EffectCatalog::new();
/// catalog
///     .push(PotionEffect::new("frostbite", "Frostbite", Requirement::single(Element::Ice)))
///     .unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("frostbite").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct EffectCatalog {
    effects: Vec<PotionEffect>,
    index: FxHashMap<EffectId, usize>,
    new_potion: PotionEffect,
    unknown: PotionEffect,
}

impl EffectCatalog {
    /// Create an empty catalog with the standard sentinels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
            index: FxHashMap::default(),
            new_potion: PotionEffect::new_potion(),
            unknown: PotionEffect::unknown(),
        }
    }

    /// Build a catalog from effects, keeping their order.
    pub fn from_effects(
        effects: impl IntoIterator<Item = PotionEffect>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for effect in effects {
            catalog.push(effect)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON array of effects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let effects: Vec<PotionEffect> = serde_json::from_str(json)?;
        let catalog = Self::from_effects(effects)?;
        debug!(count = catalog.len(), "loaded effect catalog");
        Ok(catalog)
    }

    /// Append an effect at the end of the match order.
    pub fn push(&mut self, effect: PotionEffect) -> Result<(), CatalogError> {
        if let Err(err) = self.check_entry(&effect) {
            warn!(id = %effect.id, %err, "rejected catalog entry");
            return Err(err);
        }
        self.index.insert(effect.id.clone(), self.effects.len());
        self.effects.push(effect);
        Ok(())
    }

    fn check_entry(&self, effect: &PotionEffect) -> Result<(), CatalogError> {
        if effect.id.is_reserved() {
            return Err(CatalogError::ReservedId(effect.id.clone()));
        }
        if self.index.contains_key(&effect.id) {
            return Err(CatalogError::DuplicateId(effect.id.clone()));
        }
        // Resolution never matches an empty dominant set.
        if effect.requirement.dominant.is_empty() {
            return Err(CatalogError::EmptyRequirement(effect.id.clone()));
        }
        Ok(())
    }

    /// Check every threshold is reachable under `rule`.
    pub fn validate(&self, rule: &TierRule) -> Result<(), CatalogError> {
        for effect in &self.effects {
            if let Some(min_tier) = effect.requirement.max_threshold() {
                if min_tier > rule.max_tier {
                    return Err(CatalogError::UnreachableThreshold {
                        id: effect.id.clone(),
                        min_tier,
                        max_tier: rule.max_tier,
                    });
                }
            }
        }
        Ok(())
    }

    /// First effect, in declaration order, whose requirement holds.
    #[must_use]
    pub fn first_match(&self, dominant: ElementSet, tiers: &PotionTiers) -> Option<&PotionEffect> {
        self.effects
            .iter()
            .find(|e| e.requirement.is_met(dominant, tiers))
    }

    /// Look up an effect by id. Sentinel ids resolve to the sentinels.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PotionEffect> {
        match id {
            EffectId::NEW => Some(&self.new_potion),
            EffectId::UNKNOWN => Some(&self.unknown),
            _ => self
                .index
                .get(&EffectId::new(id))
                .map(|&i| &self.effects[i]),
        }
    }

    /// The "empty selection" sentinel.
    #[must_use]
    pub fn new_potion(&self) -> &PotionEffect {
        &self.new_potion
    }

    /// The "no match" sentinel.
    #[must_use]
    pub fn unknown(&self) -> &PotionEffect {
        &self.unknown
    }

    /// Number of catalog entries, excluding sentinels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate entries in match order.
    pub fn iter(&self) -> impl Iterator<Item = &PotionEffect> {
        self.effects.iter()
    }
}

impl Default for EffectCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;
    use crate::effects::Requirement;

    fn tiers(values: [u8; 5]) -> PotionTiers {
        PotionTiers::from_fn(|el| values[el.index()])
    }

    #[test]
    fn test_rejects_reserved_id() {
        let mut catalog = EffectCatalog::new();
        let err = catalog
            .push(PotionEffect::new("unknown", "Fake", Requirement::single(Element::Fire)))
            .unwrap_err();
        assert!(matches!(err, CatalogError::ReservedId(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut catalog = EffectCatalog::new();
        catalog
            .push(PotionEffect::new("a", "A", Requirement::single(Element::Fire)))
            .unwrap();
        let err = catalog
            .push(PotionEffect::new("a", "A2", Requirement::single(Element::Ice)))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_rejects_empty_requirement() {
        let mut catalog = EffectCatalog::new();
        let err = catalog
            .push(PotionEffect::new("nothing", "Nothing", Requirement::default()))
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRequirement(_)));
    }

    #[test]
    fn test_validate_unreachable_threshold() {
        let catalog = EffectCatalog::from_effects([PotionEffect::new(
            "inferno",
            "Inferno",
            Requirement::single(Element::Fire).with_threshold(Element::Fire, 6),
        )])
        .unwrap();

        let err = catalog.validate(&TierRule::STANDARD).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnreachableThreshold { min_tier: 6, max_tier: 5, .. }
        ));

        let wide = TierRule {
            max_tier: 8,
            ..TierRule::STANDARD
        };
        assert!(catalog.validate(&wide).is_ok());
    }

    #[test]
    fn test_first_match_respects_order() {
        let catalog = EffectCatalog::from_effects([
            PotionEffect::new(
                "strong",
                "Strong",
                Requirement::single(Element::Fire).with_threshold(Element::Fire, 4),
            ),
            PotionEffect::new("weak", "Weak", Requirement::single(Element::Fire)),
            PotionEffect::new("shadowed", "Shadowed", Requirement::single(Element::Fire)),
        ])
        .unwrap();

        let t = tiers([4, 0, 0, 0, 0]);
        assert_eq!(catalog.first_match(t.dominant(), &t).unwrap().id, "strong");

        let t = tiers([2, 0, 0, 0, 0]);
        assert_eq!(catalog.first_match(t.dominant(), &t).unwrap().id, "weak");

        let t = tiers([0, 2, 0, 0, 0]);
        assert!(catalog.first_match(t.dominant(), &t).is_none());
    }

    #[test]
    fn test_get_includes_sentinels() {
        let catalog = EffectCatalog::new();
        assert_eq!(catalog.get("new").unwrap().display_name, "New Potion");
        assert_eq!(catalog.get("unknown").unwrap().id, "unknown");
        assert!(catalog.get("incendiary").is_none());
    }

    #[test]
    fn test_from_json_keeps_order() {
        let json = r#"[
            { "id": "b", "display_name": "B", "requirement": { "dominant": ["ice"] } },
            { "id": "a", "display_name": "A", "requirement": { "dominant": ["fire", "ice"] } }
        ]"#;
        let catalog = EffectCatalog::from_json(json).unwrap();
        let ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            EffectCatalog::from_json("[{ \"id\": 3 }]"),
            Err(CatalogError::Parse(_))
        ));
    }
}
