//! CLI command implementations for Boomtown.

pub(crate) mod play;
pub(crate) mod survey;

mod output;

use boomtown::survey::SurveyError;
use boomtown::{ConfigError, GameConfig, TownError};
use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Output format for the `survey` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SurveyFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Command-line values that override the configuration file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    /// Configuration file to start from.
    pub(crate) config: Option<PathBuf>,
    /// Town toughness probability.
    pub(crate) toughness: Option<f64>,
    /// Force easy mode on.
    pub(crate) easy: bool,
    /// Starting gold.
    pub(crate) gold: Option<u32>,
    /// Extra starting items.
    pub(crate) items: Vec<String>,
}

impl Overrides {
    /// Load the configuration file (or defaults) and apply the overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the result is invalid.
    pub(crate) fn resolve(self) -> Result<GameConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(toughness) = self.toughness {
            config.toughness = toughness;
        }
        if self.easy {
            config.easy_mode = true;
        }
        if let Some(gold) = self.gold {
            config.starting_gold = gold;
        }
        config.starting_kit.extend(self.items);

        config.validate()?;
        Ok(config)
    }
}

/// Pick a seed from the clock when none was given.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn seed_or_clock(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<TownError> for CliError {
    fn from(e: TownError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SurveyError> for CliError {
    fn from(e: SurveyError) -> Self {
        Self::new(e.to_string())
    }
}
