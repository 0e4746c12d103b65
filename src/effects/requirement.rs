//! Effect requirements.
//!
//! A requirement has two parts:
//! - the exact set of dominant elements the potion must have
//! - optional minimum tiers on named elements

use serde::{Deserialize, Serialize};

use crate::core::{Element, ElementSet, PotionTiers};

/// Minimum tier on one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Threshold {
    pub element: Element,
    pub min_tier: u8,
}

impl Threshold {
    /// Create a threshold.
    #[must_use]
    pub const fn new(element: Element, min_tier: u8) -> Self {
        Self { element, min_tier }
    }

    /// Check against computed tiers.
    #[must_use]
    pub fn is_met(&self, tiers: &PotionTiers) -> bool {
        tiers[self.element] >= self.min_tier
    }
}

/// What a potion needs for an effect to apply.
///
/// ## Example
///
/// ```
/// use potion_brew::core::{Element, ElementSet, PotionTiers};
/// use potion_brew::effects::Requirement;
///
/// let req = Requirement::dominant([Element::Fire, Element::Water]).with_threshold(Element::Fire, 2);
///
/// let mut tiers = PotionTiers::default();
/// tiers[Element::Fire] = 3;
/// tiers[Element::Water] = 3;
///
/// assert!(req.is_met(tiers.dominant(), &tiers));
/// assert!(!req.is_met(ElementSet::single(Element::Fire), &tiers));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Must equal the potion's dominant set exactly.
    pub dominant: ElementSet,

    /// Every threshold must hold.
    #[serde(default)]
    pub thresholds: Vec<Threshold>,
}

impl Requirement {
    /// Require exactly these dominant elements.
    pub fn dominant(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            dominant: elements.into_iter().collect(),
            thresholds: Vec::new(),
        }
    }

    /// Require a single dominant element.
    #[must_use]
    pub fn single(element: Element) -> Self {
        Self {
            dominant: ElementSet::single(element),
            thresholds: Vec::new(),
        }
    }

    /// Add a minimum tier (builder pattern).
    #[must_use]
    pub fn with_threshold(mut self, element: Element, min_tier: u8) -> Self {
        self.thresholds.push(Threshold::new(element, min_tier));
        self
    }

    /// Check a potion's dominant set and tiers against this requirement.
    #[must_use]
    pub fn is_met(&self, dominant: ElementSet, tiers: &PotionTiers) -> bool {
        self.dominant == dominant && self.thresholds.iter().all(|t| t.is_met(tiers))
    }

    /// Highest tier any threshold asks for.
    #[must_use]
    pub fn max_threshold(&self) -> Option<u8> {
        self.thresholds.iter().map(|t| t.min_tier).max()
    }
}
