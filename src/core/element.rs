//! Elements and per-element containers.
//!
//! There are exactly five elements. Everything keyed by element
//! (stats, tiers, ingredient transforms) goes through `ElementMap`,
//! and sets of elements (dominance, requirements) through `ElementSet`.

use std::ops::{Index, IndexMut};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

/// One of the five elemental categories.
///
/// `Element::iter()` (from `strum::IntoEnumIterator`) walks them in
/// ordinal order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumCount,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Ground,
    Ice,
    Electric,
}

impl Element {
    /// Stable ordinal index (fire = 0 .. electric = 4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Static display metadata for this element.
    #[must_use]
    pub fn info(self) -> &'static ElementInfo {
        &ELEMENT_INFO[self.index()]
    }

    /// Lower-case key, as used in data files.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// The single-element flag for this element.
    #[must_use]
    pub const fn flag(self) -> ElementSet {
        match self {
            Element::Fire => ElementSet::FIRE,
            Element::Water => ElementSet::WATER,
            Element::Ground => ElementSet::GROUND,
            Element::Ice => ElementSet::ICE,
            Element::Electric => ElementSet::ELECTRIC,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().display_name)
    }
}

/// Display metadata for an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementInfo {
    /// Name shown to players. Not always the same as the key
    /// (ground is shown as "Earth").
    pub display_name: &'static str,
    /// Bar color as a hex string.
    pub color: &'static str,
    /// Icon asset path.
    pub image: &'static str,
    /// Ordinal index, equal to `Element::index`.
    pub index: usize,
}

static ELEMENT_INFO: [ElementInfo; <Element as EnumCount>::COUNT] = [
    ElementInfo {
        display_name: "Fire",
        color: "#ff9d53",
        image: "/poke-elements/el-fire.png",
        index: 0,
    },
    ElementInfo {
        display_name: "Water",
        color: "#4c92d7",
        image: "/poke-elements/el-water.png",
        index: 1,
    },
    ElementInfo {
        display_name: "Earth",
        color: "#da7844",
        image: "/poke-elements/el-ground.png",
        index: 2,
    },
    ElementInfo {
        display_name: "Ice",
        color: "#75cfc1",
        image: "/poke-elements/el-ice.png",
        index: 3,
    },
    ElementInfo {
        display_name: "Lightning",
        color: "#f3d339",
        image: "/poke-elements/el-electric.png",
        index: 4,
    },
];

/// A value for every element.
///
/// Serializes as an object keyed by element name. Missing keys
/// deserialize to `T::default()`.
///
/// ## Example
///
/// ```
/// use potion_brew::core::{Element, ElementMap};
///
/// let mut stats: ElementMap<f64> = ElementMap::default();
/// stats[Element::Fire] = 85.0;
///
/// assert_eq!(stats[Element::Fire], 85.0);
/// assert_eq!(stats[Element::Ice], 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ElementMap<T> {
    pub fire: T,
    pub water: T,
    pub ground: T,
    pub ice: T,
    pub electric: T,
}

impl<T> ElementMap<T> {
    /// Build a map by evaluating `f` once per element, in ordinal order.
    pub fn from_fn(mut f: impl FnMut(Element) -> T) -> Self {
        Self {
            fire: f(Element::Fire),
            water: f(Element::Water),
            ground: f(Element::Ground),
            ice: f(Element::Ice),
            electric: f(Element::Electric),
        }
    }

    /// Map every value, keeping the element association.
    pub fn map<U>(&self, mut f: impl FnMut(Element, &T) -> U) -> ElementMap<U> {
        ElementMap::from_fn(|el| f(el, &self[el]))
    }

    /// Iterate `(element, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, &T)> {
        Element::iter().map(move |el| (el, &self[el]))
    }
}

impl<T> Index<Element> for ElementMap<T> {
    type Output = T;

    fn index(&self, element: Element) -> &T {
        match element {
            Element::Fire => &self.fire,
            Element::Water => &self.water,
            Element::Ground => &self.ground,
            Element::Ice => &self.ice,
            Element::Electric => &self.electric,
        }
    }
}

impl<T> IndexMut<Element> for ElementMap<T> {
    fn index_mut(&mut self, element: Element) -> &mut T {
        match element {
            Element::Fire => &mut self.fire,
            Element::Water => &mut self.water,
            Element::Ground => &mut self.ground,
            Element::Ice => &mut self.ice,
            Element::Electric => &mut self.electric,
        }
    }
}

bitflags! {
    /// An unordered set of elements.
    ///
    /// Equality is set equality, so `{fire, water} == {water, fire}`.
    /// Serializes as a list of element keys in ordinal order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "Vec<Element>", into = "Vec<Element>")]
    pub struct ElementSet: u8 {
        const FIRE     = 1 << 0;
        const WATER    = 1 << 1;
        const GROUND   = 1 << 2;
        const ICE      = 1 << 3;
        const ELECTRIC = 1 << 4;
    }
}

impl ElementSet {
    /// A set holding a single element.
    #[must_use]
    pub const fn single(element: Element) -> Self {
        element.flag()
    }

    /// Add an element (builder pattern).
    #[must_use]
    pub const fn with(self, element: Element) -> Self {
        self.union(element.flag())
    }

    /// Check membership of a single element.
    #[must_use]
    pub const fn has(self, element: Element) -> bool {
        self.contains(element.flag())
    }

    /// Number of elements in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Iterate members in ordinal order.
    pub fn elements(self) -> impl Iterator<Item = Element> {
        Element::iter().filter(move |el| self.has(*el))
    }
}

impl From<Element> for ElementSet {
    fn from(element: Element) -> Self {
        element.flag()
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ElementSet::empty(), |set, el| set.with(el))
    }
}

impl From<Vec<Element>> for ElementSet {
    fn from(elements: Vec<Element>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<ElementSet> for Vec<Element> {
    fn from(set: ElementSet) -> Self {
        set.elements().collect()
    }
}

impl std::fmt::Display for ElementSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, el) in self.elements().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(el.key())?;
        }
        f.write_str("}")
    }
}
