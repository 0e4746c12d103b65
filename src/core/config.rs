//! Engine configuration.
//!
//! Hosts configure the engine once at startup. Every field has a
//! default, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::tiers::TierRule;

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use potion_brew::core::{EngineConfig, TierRule};
///
/// let config = EngineConfig::from_json(r#"{ "tiers": { "bias": 1.0 } }"#).unwrap();
/// assert_eq!(config.tiers, TierRule::LEGACY);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tier classification rule.
    pub tiers: TierRule,
}

impl EngineConfig {
    /// Configuration using the given tier rule.
    #[must_use]
    pub fn with_tiers(mut self, tiers: TierRule) -> Self {
        self.tiers = tiers;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a usable tier rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.tiers.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidTierWidth(width));
        }
        if !self.tiers.bias.is_finite() {
            return Err(ConfigError::InvalidTierBias(self.tiers.bias));
        }
        Ok(())
    }
}
