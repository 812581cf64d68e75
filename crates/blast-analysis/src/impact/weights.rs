//! Sensitivity weights and risk band thresholds.

use blast_core::config::{BandConfig, BlastConfig, ScoringConfig};
use blast_core::constants::{
    DEFAULT_CRITICAL_ABOVE, DEFAULT_ELEVATED_ABOVE, DEFAULT_HIGH_WEIGHT, DEFAULT_LOW_WEIGHT,
    DEFAULT_MEDIUM_WEIGHT,
};
use blast_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

use super::types::RiskBand;
use crate::catalog::Sensitivity;

/// Integer weight per sensitivity tier.
///
/// Invariant: `0 < low < medium < high`. Enforced by `new`, the only way
/// to build a non-default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityWeights {
    high: u32,
    medium: u32,
    low: u32,
}

impl Default for SensitivityWeights {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_WEIGHT,
            medium: DEFAULT_MEDIUM_WEIGHT,
            low: DEFAULT_LOW_WEIGHT,
        }
    }
}

impl SensitivityWeights {
    pub fn new(high: u32, medium: u32, low: u32) -> Result<Self, ConfigError> {
        let config = BlastConfig {
            scoring: ScoringConfig {
                high_weight: Some(high),
                medium_weight: Some(medium),
                low_weight: Some(low),
            },
            ..Default::default()
        };
        BlastConfig::validate(&config)?;
        Ok(Self { high, medium, low })
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.effective_high_weight(),
            config.effective_medium_weight(),
            config.effective_low_weight(),
        )
    }

    pub fn weight(&self, sensitivity: Sensitivity) -> u32 {
        match sensitivity {
            Sensitivity::High => self.high,
            Sensitivity::Medium => self.medium,
            Sensitivity::Low => self.low,
        }
    }
}

/// Thresholds splitting scores into Low / Elevated / Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBands {
    elevated_above: u8,
    critical_above: u8,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            elevated_above: DEFAULT_ELEVATED_ABOVE,
            critical_above: DEFAULT_CRITICAL_ABOVE,
        }
    }
}

impl RiskBands {
    pub fn new(elevated_above: u8, critical_above: u8) -> Result<Self, ConfigError> {
        let config = BlastConfig {
            bands: BandConfig {
                elevated_above: Some(elevated_above),
                critical_above: Some(critical_above),
            },
            ..Default::default()
        };
        BlastConfig::validate(&config)?;
        Ok(Self {
            elevated_above,
            critical_above,
        })
    }

    pub fn from_config(config: &BandConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.effective_elevated_above(),
            config.effective_critical_above(),
        )
    }

    pub fn classify(&self, score: u8) -> RiskBand {
        if score > self.critical_above {
            RiskBand::Critical
        } else if score > self.elevated_above {
            RiskBand::Elevated
        } else {
            RiskBand::Low
        }
    }
}
