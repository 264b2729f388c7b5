//! Game configuration.
//!
//! Settings load from a JSON file. Every field is optional and falls back to
//! its default, so `{}` is a valid configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{DEFAULT_PRICES, Outfitter};

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for a game of Boomtown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Probability that a new town is tough.
    pub toughness: f64,
    /// Crossing items never wear out.
    pub easy_mode: bool,
    /// Gold a new hunter starts with.
    pub starting_gold: u32,
    /// Items a new hunter starts with.
    pub starting_kit: Vec<String>,
    /// Whether towns start with the town-local sword flag set.
    pub equipment_available: bool,
    /// Shop price list.
    pub prices: BTreeMap<String, u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            toughness: 0.5,
            easy_mode: false,
            starting_gold: 10,
            starting_kit: Vec::new(),
            equipment_available: false,
            prices: DEFAULT_PRICES
                .iter()
                .map(|&(item, price)| (item.to_string(), price))
                .collect(),
        }
    }
}

impl GameConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.toughness) {
            return Err(ConfigError::Invalid(format!(
                "toughness must be within [0, 1], got {}",
                self.toughness
            )));
        }
        if let Some((item, _)) = self.prices.iter().find(|&(_, &price)| price == 0) {
            return Err(ConfigError::Invalid(format!("price of {item} must be positive")));
        }
        if let Some(item) = self.starting_kit.iter().find(|item| item.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "starting kit contains an empty item name: {item:?}"
            )));
        }
        Ok(())
    }

    /// A shop stocked from this configuration.
    #[must_use]
    pub fn outfitter(&self) -> Outfitter {
        Outfitter::with_prices(self.prices.clone())
    }
}
