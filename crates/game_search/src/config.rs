//! Engine configuration and its TOML form.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::adapter::Score;
use crate::error::{ConfigError, SearchError};

/// Engine configuration
///
/// ```toml
/// min_eval = -1000
/// max_eval = 1000
/// default_depth = 4
/// move_time_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lowest score `evaluate` may return (maximizer has lost)
    pub min_eval: Score,
    /// Highest score `evaluate` may return (minimizer has lost)
    pub max_eval: Score,
    /// Depth used by `compute_default`
    pub default_depth: u8,
    /// Wall-clock limit per search (None = no limit)
    pub move_time_ms: Option<u64>,
    /// Nodes between clock reads when `move_time_ms` is set
    pub clock_check_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_eval: -100,
            max_eval: 100,
            default_depth: 6,
            move_time_ms: None,
            clock_check_interval: 1024,
        }
    }
}

impl SearchConfig {
    pub fn with_bounds(min_eval: Score, max_eval: Score) -> Self {
        Self {
            min_eval,
            max_eval,
            ..Default::default()
        }
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }

    /// Check that the score range is usable for pruning.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.min_eval < self.max_eval && self.min_eval <= 0 && self.max_eval >= 0 {
            Ok(())
        } else {
            Err(SearchError::InvalidBounds {
                min: self.min_eval,
                max: self.max_eval,
            })
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
