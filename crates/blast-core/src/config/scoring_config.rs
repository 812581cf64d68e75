//! Sensitivity weight configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIGH_WEIGHT, DEFAULT_LOW_WEIGHT, DEFAULT_MEDIUM_WEIGHT};

/// Per-tier sensitivity weights used by the risk scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of a High sensitivity resource. Default: 3.
    pub high_weight: Option<u32>,
    /// Weight of a Medium sensitivity resource. Default: 2.
    pub medium_weight: Option<u32>,
    /// Weight of a Low sensitivity resource. Default: 1.
    pub low_weight: Option<u32>,
}

impl ScoringConfig {
    pub fn effective_high_weight(&self) -> u32 {
        self.high_weight.unwrap_or(DEFAULT_HIGH_WEIGHT)
    }

    pub fn effective_medium_weight(&self) -> u32 {
        self.medium_weight.unwrap_or(DEFAULT_MEDIUM_WEIGHT)
    }

    pub fn effective_low_weight(&self) -> u32 {
        self.low_weight.unwrap_or(DEFAULT_LOW_WEIGHT)
    }
}
