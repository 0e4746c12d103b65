//! Effect text calculations.
//!
//! Each catalog entry names one `Calculation`. The set of calculation
//! kinds is closed, so they are plain data dispatched by `match`.

use serde::{Deserialize, Serialize};

use crate::core::{Element, ElementSet, PotionStats, PotionTiers};
use crate::ingredients::Selection;

/// Inputs available to a calculation.
#[derive(Clone, Copy, Debug)]
pub struct CalculationContext<'a> {
    pub stats: &'a PotionStats,
    pub tiers: &'a PotionTiers,
    pub selection: &'a Selection,
}

/// How an effect derives its short description from the potion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    /// Instant elemental damage.
    ///
    /// If every other element is at tier 0 the potion is pure and deals
    /// `element` damage scaled by `pure_scale`. Otherwise the strongest
    /// other element (by raw value, ties to ordinal order) takes over,
    /// scaled by `impure_scale`.
    ElementalDamage {
        element: Element,
        #[serde(default = "default_pure_scale")]
        pure_scale: f64,
        #[serde(default = "default_impure_scale")]
        impure_scale: f64,
    },

    /// Healing proportional to the sum of all tiers.
    TierSumRestore {
        #[serde(default = "default_per_tier")]
        per_tier: f64,
    },

    /// Matched effect whose text has not been written yet.
    #[default]
    Unauthored,
}

fn default_pure_scale() -> f64 {
    0.8
}

fn default_impure_scale() -> f64 {
    1.0
}

fn default_per_tier() -> f64 {
    25.0
}

impl Calculation {
    /// Damage keyed to `element` with the standard scales.
    #[must_use]
    pub fn elemental_damage(element: Element) -> Self {
        Self::ElementalDamage {
            element,
            pure_scale: default_pure_scale(),
            impure_scale: default_impure_scale(),
        }
    }

    /// Tier-sum healing with the standard rate.
    #[must_use]
    pub fn tier_sum_restore() -> Self {
        Self::TierSumRestore {
            per_tier: default_per_tier(),
        }
    }

    /// Produce the effect text, or `None` if this effect has none yet.
    #[must_use]
    pub fn describe(&self, ctx: &CalculationContext<'_>) -> Option<String> {
        match self {
            Calculation::ElementalDamage {
                element,
                pure_scale,
                impure_scale,
            } => {
                let others = ElementSet::all().difference(element.flag());
                let pure = others.elements().all(|el| ctx.tiers[el] == 0);

                let (damage_element, damage) = if pure {
                    (*element, ctx.stats[*element] * pure_scale)
                } else {
                    // `others` is never empty, there are five elements.
                    let strongest = ctx.stats.strongest_of(others).unwrap_or(*element);
                    (strongest, ctx.stats[strongest] * impure_scale)
                };
                Some(format!(
                    "Deal {} {} DMG",
                    round_half_up(damage),
                    damage_element
                ))
            }

            Calculation::TierSumRestore { per_tier } => {
                let healing = round_half_up(f64::from(ctx.tiers.sum()) * per_tier);
                Some(format!("Restore {healing} HP"))
            }

            Calculation::Unauthored => None,
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    // `value + 0.5` itself rounds once the fraction bits run out.
    if value - floor >= 0.5 {
        (floor + 1.0) as i64
    } else {
        floor as i64
    }
}
