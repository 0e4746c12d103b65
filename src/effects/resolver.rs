//! Effect resolution - turning a potion into an effect.
//!
//! The `EffectResolver` runs the whole recalculation for the
//! presentation layer:
//!
//! ```text
//! selection -> stats -> tiers -> dominant set -> effect -> text
//! ```
//!
//! Every step is pure. Calling it twice with the same input gives the
//! same answer.

use tracing::{debug, trace};

use crate::core::{ElementSet, EngineConfig, PotionStats, PotionTiers};
use crate::error::{BrewError, SelectionError};
use crate::ingredients::{IngredientRegistry, Selection};

use super::calculation::CalculationContext;
use super::catalog::EffectCatalog;
use super::effect::{EffectId, PotionEffect};

/// Outcome of resolving a potion against the catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'c> {
    /// No ingredients picked yet.
    Empty,

    /// Ingredients picked, but no catalog entry matches.
    Unmatched,

    /// A catalog entry matched.
    ///
    /// `description` is `None` when the effect has no authored text yet.
    /// That is still a real match, unlike `Unmatched`.
    Matched {
        effect: &'c PotionEffect,
        description: Option<String>,
    },
}

impl<'c> Resolution<'c> {
    /// The effect to display, falling back to the catalog's sentinels.
    #[must_use]
    pub fn effect(&self, catalog: &'c EffectCatalog) -> &'c PotionEffect {
        match self {
            Resolution::Empty => catalog.new_potion(),
            Resolution::Unmatched => catalog.unknown(),
            Resolution::Matched { effect, .. } => *effect,
        }
    }

    /// Id of the displayed effect.
    #[must_use]
    pub fn effect_id(&self) -> &str {
        match self {
            Resolution::Empty => EffectId::NEW,
            Resolution::Unmatched => EffectId::UNKNOWN,
            Resolution::Matched { effect, .. } => effect.id.as_str(),
        }
    }

    /// Computed effect text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Resolution::Matched { description, .. } => description.as_deref(),
            _ => None,
        }
    }

    /// Check if a catalog entry matched.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}

/// Everything computed for one selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Brew<'c> {
    pub stats: PotionStats,
    pub tiers: PotionTiers,
    pub dominant: ElementSet,
    pub resolution: Resolution<'c>,
}

/// Resolves potions against a catalog.
///
/// ## Example
///
/// ```
/// use potion_brew::core::{Element, EngineConfig, PotionStats};
/// use potion_brew::effects::{EffectCatalog, EffectResolver, Resolution};
/// use potion_brew::ingredients::{IngredientId, Selection};
///
/// let catalog = EffectCatalog::prototype().unwrap();
/// let resolver = EffectResolver::new(&catalog, EngineConfig::default()).unwrap();
///
/// let mut stats = PotionStats::zero();
/// stats[Element::Fire] = 85.0;
///
/// let selection = Selection::new().with(IngredientId::new(1));
/// let resolution = resolver.resolve(&stats, &selection);
/// assert_eq!(resolution.effect_id(), "incendiary");
/// assert_eq!(resolution.description(), Some("Deal 68 Fire DMG"));
///
/// assert_eq!(resolver.resolve(&PotionStats::zero(), &Selection::new()), Resolution::Empty);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EffectResolver<'c> {
    catalog: &'c EffectCatalog,
    config: EngineConfig,
}

impl<'c> EffectResolver<'c> {
    /// Create a resolver, validating the config and the catalog against it.
    pub fn new(catalog: &'c EffectCatalog, config: EngineConfig) -> Result<Self, BrewError> {
        config.validate()?;
        catalog.validate(&config.tiers)?;
        Ok(Self { catalog, config })
    }

    /// The catalog being resolved against.
    #[must_use]
    pub fn catalog(&self) -> &'c EffectCatalog {
        self.catalog
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tiers for `stats` under the configured rule.
    #[must_use]
    pub fn tiers(&self, stats: &PotionStats) -> PotionTiers {
        stats.tiers(&self.config.tiers)
    }

    /// Dominant elements for `stats` under the configured rule.
    #[must_use]
    pub fn dominant_elements(&self, stats: &PotionStats) -> ElementSet {
        self.tiers(stats).dominant()
    }

    /// First catalog entry matching `stats`, ignoring the selection.
    #[must_use]
    pub fn match_effect(&self, stats: &PotionStats) -> Option<&'c PotionEffect> {
        let tiers = self.tiers(stats);
        self.match_tiers(&tiers)
    }

    fn match_tiers(&self, tiers: &PotionTiers) -> Option<&'c PotionEffect> {
        let dominant = tiers.dominant();
        if dominant.is_empty() {
            return None;
        }
        self.catalog.first_match(dominant, tiers)
    }

    /// Resolve `stats`, produced from `selection`, to an effect.
    #[must_use]
    pub fn resolve(&self, stats: &PotionStats, selection: &Selection) -> Resolution<'c> {
        let tiers = self.tiers(stats);
        self.resolve_tiers(stats, &tiers, selection)
    }

    fn resolve_tiers(
        &self,
        stats: &PotionStats,
        tiers: &PotionTiers,
        selection: &Selection,
    ) -> Resolution<'c> {
        if selection.is_empty() {
            return Resolution::Empty;
        }

        match self.match_tiers(tiers) {
            Some(effect) => {
                let description = effect.calculation.describe(&CalculationContext {
                    stats,
                    tiers,
                    selection,
                });
                trace!(effect = %effect.id, ?description, "matched effect");
                Resolution::Matched {
                    effect,
                    description,
                }
            }
            None => {
                debug!(dominant = %tiers.dominant(), "no effect matches");
                Resolution::Unmatched
            }
        }
    }

    /// Aggregate `selection` and resolve the result.
    pub fn brew(
        &self,
        selection: &Selection,
        registry: &IngredientRegistry,
    ) -> Result<Brew<'c>, SelectionError> {
        let stats = selection.stats(registry)?;
        let tiers = self.tiers(&stats);
        let resolution = self.resolve_tiers(&stats, &tiers, selection);
        Ok(Brew {
            stats,
            tiers,
            dominant: tiers.dominant(),
            resolution,
        })
    }
}
