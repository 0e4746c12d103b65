//! Tier classification.
//!
//! Raw stats are bucketed into tiers `0..=max_tier` of fixed width.
//! The default rule is `clamp(floor(value / 20), 0, 5)`.

use serde::{Deserialize, Serialize};

use super::element::{ElementMap, ElementSet};

/// Discrete tier per element.
pub type PotionTiers = ElementMap<u8>;

/// How raw stat values map onto tiers.
///
/// `tier = clamp(floor((value + bias) / width), 0, max_tier)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierRule {
    /// Width of one tier band.
    pub width: f64,
    /// Highest reachable tier.
    pub max_tier: u8,
    /// Added to the value before dividing.
    pub bias: f64,
}

impl TierRule {
    /// `floor(value / 20)`, clamped to `[0, 5]`.
    pub const STANDARD: TierRule = TierRule {
        width: 20.0,
        max_tier: 5,
        bias: 0.0,
    };

    /// `floor((value + 1) / 20)`, clamped to `[0, 5]`.
    ///
    /// Earlier revision of the rule; a stat of 19 already reaches tier 1.
    pub const LEGACY: TierRule = TierRule {
        width: 20.0,
        max_tier: 5,
        bias: 1.0,
    };

    /// Tier for a single raw value.
    ///
    /// Total over `f64`: NaN and negative infinity land in tier 0,
    /// positive infinity in `max_tier`.
    #[must_use]
    pub fn tier_of(&self, value: f64) -> u8 {
        let band = ((value + self.bias) / self.width).floor();
        if band.is_nan() {
            return 0;
        }
        band.clamp(0.0, f64::from(self.max_tier)) as u8
    }

}

impl Default for TierRule {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PotionTiers {
    /// Highest tier over all elements.
    #[must_use]
    pub fn max(&self) -> u8 {
        self.iter().map(|(_, t)| *t).max().unwrap_or(0)
    }

    /// Sum of all tiers.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.iter().map(|(_, t)| u32::from(*t)).sum()
    }

    /// Every element sitting at the highest tier.
    ///
    /// Empty when the highest tier is 0, so a potion only gets a
    /// dominant element once something reaches tier 1. Ties are kept.
    #[must_use]
    pub fn dominant(&self) -> ElementSet {
        let max = self.max();
        if max == 0 {
            return ElementSet::empty();
        }
        self.iter()
            .filter(|(_, t)| **t == max)
            .map(|(el, _)| el)
            .collect()
    }
}
