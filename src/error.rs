//! Error types.
//!
//! Brewing itself is total: any stat vector resolves to an effect or a
//! sentinel. Errors only come from loading data, registering it, and
//! looking up ingredients that were never registered.

use crate::effects::EffectId;
use crate::ingredients::IngredientId;

/// Invalid engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tier width must be positive and finite.
    #[error("tier width must be positive and finite, got {0}")]
    InvalidTierWidth(f64),

    /// Tier bias must be finite.
    #[error("tier bias must be finite, got {0}")]
    InvalidTierBias(f64),
}

/// Rejected effect catalog entry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed.
    #[error("failed to parse effect catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Id collides with one of the sentinel effects.
    #[error("effect id `{0}` is reserved")]
    ReservedId(EffectId),

    /// Id already present in the catalog.
    #[error("effect `{0}` already registered")]
    DuplicateId(EffectId),

    /// Entry can never match because it requires no dominant element.
    #[error("effect `{0}` requires an empty dominant set")]
    EmptyRequirement(EffectId),

    /// Threshold asks for a tier that cannot be reached.
    #[error("effect `{id}` requires tier {min_tier}, above the maximum of {max_tier}")]
    UnreachableThreshold {
        id: EffectId,
        min_tier: u8,
        max_tier: u8,
    },
}

/// Rejected ingredient registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Ingredient JSON could not be parsed.
    #[error("failed to parse ingredient list: {0}")]
    Parse(#[from] serde_json::Error),

    /// Id already present in the registry.
    #[error("{0} already registered")]
    DuplicateId(IngredientId),
}

/// A selection referenced an ingredient the registry does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0} is not registered")]
    UnknownIngredient(IngredientId),
}

/// Any error raised while setting up or running the engine.
#[derive(Debug, thiserror::Error)]
pub enum BrewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
