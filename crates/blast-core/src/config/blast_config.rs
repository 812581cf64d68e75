//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BandConfig, ControllerConfig, ScoringConfig};
use crate::constants::{CONFIG_FILE_NAME, MAX_RISK_SCORE};
use crate::errors::ConfigError;
use crate::types::AccessMode;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`BLAST_*`)
/// 3. Project config (`blast.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BlastConfig {
    pub scoring: ScoringConfig,
    pub bands: BandConfig,
    pub controller: ControllerConfig,
}

/// Override arguments that can be applied to a config by the embedding
/// application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub initial_mode: Option<AccessMode>,
    pub high_weight: Option<u32>,
    pub medium_weight: Option<u32>,
    pub low_weight: Option<u32>,
}

impl BlastConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Weights must be positive and strictly increasing with sensitivity;
    /// band thresholds must be ordered and within the score range.
    pub fn validate(config: &BlastConfig) -> Result<(), ConfigError> {
        let scoring = &config.scoring;
        let (high, medium, low) = (
            scoring.effective_high_weight(),
            scoring.effective_medium_weight(),
            scoring.effective_low_weight(),
        );
        if low == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.low_weight".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if medium <= low {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.medium_weight".to_string(),
                message: format!("must be greater than low_weight ({low})"),
            });
        }
        if high <= medium {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.high_weight".to_string(),
                message: format!("must be greater than medium_weight ({medium})"),
            });
        }

        let elevated = config.bands.effective_elevated_above();
        let critical = config.bands.effective_critical_above();
        if critical > MAX_RISK_SCORE {
            return Err(ConfigError::ValidationFailed {
                field: "bands.critical_above".to_string(),
                message: format!("must be at most {MAX_RISK_SCORE}"),
            });
        }
        if elevated >= critical {
            return Err(ConfigError::ValidationFailed {
                field: "bands.elevated_above".to_string(),
                message: format!("must be less than critical_above ({critical})"),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BlastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BlastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut BlastConfig, other: &BlastConfig) {
        // Scoring
        if other.scoring.high_weight.is_some() {
            base.scoring.high_weight = other.scoring.high_weight;
        }
        if other.scoring.medium_weight.is_some() {
            base.scoring.medium_weight = other.scoring.medium_weight;
        }
        if other.scoring.low_weight.is_some() {
            base.scoring.low_weight = other.scoring.low_weight;
        }

        // Bands
        if other.bands.elevated_above.is_some() {
            base.bands.elevated_above = other.bands.elevated_above;
        }
        if other.bands.critical_above.is_some() {
            base.bands.critical_above = other.bands.critical_above;
        }

        // Controller
        if other.controller.initial_mode.is_some() {
            base.controller.initial_mode = other.controller.initial_mode;
        }
        if other.controller.transition_ms.is_some() {
            base.controller.transition_ms = other.controller.transition_ms;
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    /// Pattern: `BLAST_SCORING_HIGH_WEIGHT`, `BLAST_BANDS_CRITICAL_ABOVE`, etc.
    fn apply_env_overrides(config: &mut BlastConfig) {
        if let Some(v) = env_parse::<u32>("BLAST_SCORING_HIGH_WEIGHT") {
            config.scoring.high_weight = Some(v);
        }
        if let Some(v) = env_parse::<u32>("BLAST_SCORING_MEDIUM_WEIGHT") {
            config.scoring.medium_weight = Some(v);
        }
        if let Some(v) = env_parse::<u32>("BLAST_SCORING_LOW_WEIGHT") {
            config.scoring.low_weight = Some(v);
        }
        if let Some(v) = env_parse::<u8>("BLAST_BANDS_ELEVATED_ABOVE") {
            config.bands.elevated_above = Some(v);
        }
        if let Some(v) = env_parse::<u8>("BLAST_BANDS_CRITICAL_ABOVE") {
            config.bands.critical_above = Some(v);
        }
        if let Some(v) = env_parse::<AccessMode>("BLAST_INITIAL_MODE") {
            config.controller.initial_mode = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut BlastConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.initial_mode {
            config.controller.initial_mode = Some(v);
        }
        if let Some(v) = overrides.high_weight {
            config.scoring.high_weight = Some(v);
        }
        if let Some(v) = overrides.medium_weight {
            config.scoring.medium_weight = Some(v);
        }
        if let Some(v) = overrides.low_weight {
            config.scoring.low_weight = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
