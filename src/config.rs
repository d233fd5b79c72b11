//! Trainer configuration loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid config and reproduces the
//! built-in grading behavior.
//!
//! ```json
//! {
//!   "grading": {
//!     "pot_odds_call_threshold": 0.25,
//!     "strict_actions": false,
//!     "include_alternatives": true
//!   },
//!   "opening_ranges": {
//!     "UTG": "99+, ATs+, AQo+, KJs+"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, TrainerError};
use crate::position::Position;
use crate::theory::OpeningRanges;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Decision grading knobs.
    #[serde(default)]
    pub grading: GradingConfig,
    /// Opening-range overrides: position name to range notation.
    /// Positions not listed keep the built-in table.
    #[serde(default)]
    pub opening_ranges: BTreeMap<String, String>,
}

/// Decision grading configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingConfig {
    /// With a playable hand facing a bet, call when pot odds are below this.
    #[serde(default = "default_call_threshold")]
    pub pot_odds_call_threshold: f64,
    /// Reject chosen actions that are not legal in the scenario.
    #[serde(default)]
    pub strict_actions: bool,
    /// Grade the other legal actions alongside the chosen one.
    #[serde(default = "default_true")]
    pub include_alternatives: bool,
}

fn default_call_threshold() -> f64 {
    0.25
}

fn default_true() -> bool {
    true
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            pot_odds_call_threshold: default_call_threshold(),
            strict_actions: false,
            include_alternatives: true,
        }
    }
}

impl TrainerConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| TrainerError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TrainerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.grading.pot_odds_call_threshold;
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(TrainerError::Config(format!(
                "pot_odds_call_threshold must be in (0, 1), got {threshold}"
            )));
        }

        for key in self.opening_ranges.keys() {
            if key.parse::<Position>().is_err() {
                return Err(TrainerError::Config(format!(
                    "unknown position {key:?} in opening_ranges"
                )));
            }
        }

        Ok(())
    }

    /// Opening ranges with this config's overrides applied.
    pub fn opening_ranges(&self) -> Result<OpeningRanges> {
        if self.opening_ranges.is_empty() {
            return Ok(OpeningRanges::standard().clone());
        }
        OpeningRanges::from_overrides(&self.opening_ranges)
    }
}
