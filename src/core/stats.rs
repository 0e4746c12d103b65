//! Potion stat vectors and ingredient transforms.
//!
//! A potion's stats start at zero for every element. Each ingredient
//! then applies an affine transform per element:
//!
//! ```text
//! stat' = stat * multiplier + offset
//! ```
//!
//! Because the multiplier scales the running total, the order in which
//! ingredients are applied matters.

use serde::{Deserialize, Serialize};

use super::element::{Element, ElementMap, ElementSet};
use super::tiers::{PotionTiers, TierRule};

/// Per-element transform contributed by one ingredient.
///
/// Serialized as `[offset, multiplier]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct StatTransform {
    /// Added after scaling.
    pub offset: f64,
    /// Scales the running stat.
    pub multiplier: f64,
}

impl StatTransform {
    /// The transform that leaves a stat unchanged.
    pub const IDENTITY: StatTransform = StatTransform {
        offset: 0.0,
        multiplier: 1.0,
    };

    /// Create a transform.
    #[must_use]
    pub const fn new(offset: f64, multiplier: f64) -> Self {
        Self { offset, multiplier }
    }

    /// A pure additive contribution.
    #[must_use]
    pub const fn add(offset: f64) -> Self {
        Self::new(offset, 1.0)
    }

    /// A pure scaling contribution.
    #[must_use]
    pub const fn scale(multiplier: f64) -> Self {
        Self::new(0.0, multiplier)
    }

    /// Apply to a single stat value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        value * self.multiplier + self.offset
    }
}

impl Default for StatTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<(f64, f64)> for StatTransform {
    fn from((offset, multiplier): (f64, f64)) -> Self {
        Self::new(offset, multiplier)
    }
}

impl From<StatTransform> for (f64, f64) {
    fn from(t: StatTransform) -> Self {
        (t.offset, t.multiplier)
    }
}

/// One ingredient's transforms, one per element.
pub type IngredientStats = ElementMap<StatTransform>;

/// Accumulated potion stats. Unbounded in both directions.
pub type PotionStats = ElementMap<f64>;

impl PotionStats {
    /// Stats of a potion with no ingredients.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Return these stats with one ingredient applied.
    ///
    /// ## Example
    ///
    /// ```
    /// use potion_brew::core::{Element, IngredientStats, PotionStats, StatTransform};
    ///
    /// let mut ember = IngredientStats::default();
    /// ember[Element::Fire] = StatTransform::add(30.0);
    ///
    /// let mut bellows = IngredientStats::default();
    /// bellows[Element::Fire] = StatTransform::scale(2.0);
    ///
    /// let stats = PotionStats::zero().with_ingredient(&ember).with_ingredient(&bellows);
    /// assert_eq!(stats[Element::Fire], 60.0);
    /// ```
    #[must_use]
    pub fn with_ingredient(&self, ingredient: &IngredientStats) -> Self {
        self.map(|el, value| ingredient[el].apply(*value))
    }

    /// Fold a sequence of ingredients, in order, onto these stats.
    #[must_use]
    pub fn with_ingredients<'a>(
        &self,
        ingredients: impl IntoIterator<Item = &'a IngredientStats>,
    ) -> Self {
        ingredients
            .into_iter()
            .fold(*self, |stats, ing| stats.with_ingredient(ing))
    }

    /// Discretize every stat into a tier.
    #[must_use]
    pub fn tiers(&self, rule: &TierRule) -> PotionTiers {
        self.map(|_, value| rule.tier_of(*value))
    }

    /// Elements at the highest tier. Empty when nothing reached tier 1.
    #[must_use]
    pub fn dominant_elements(&self, rule: &TierRule) -> ElementSet {
        self.tiers(rule).dominant()
    }

    /// The element with the highest raw value among `candidates`.
    ///
    /// Ties go to the element that comes first in ordinal order.
    /// Returns `None` if `candidates` is empty.
    #[must_use]
    pub fn strongest_of(&self, candidates: ElementSet) -> Option<Element> {
        candidates.elements().fold(None, |best, el| match best {
            Some(b) if self[b] >= self[el] => Some(b),
            _ => Some(el),
        })
    }
}
