//! Risk band thresholds.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CRITICAL_ABOVE, DEFAULT_ELEVATED_ABOVE};

/// Score thresholds splitting Low / Elevated / Critical.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BandConfig {
    /// Scores strictly above this are Elevated. Default: 30.
    pub elevated_above: Option<u8>,
    /// Scores strictly above this are Critical. Default: 60.
    pub critical_above: Option<u8>,
}

impl BandConfig {
    pub fn effective_elevated_above(&self) -> u8 {
        self.elevated_above.unwrap_or(DEFAULT_ELEVATED_ABOVE)
    }

    pub fn effective_critical_above(&self) -> u8 {
        self.critical_above.unwrap_or(DEFAULT_CRITICAL_ABOVE)
    }
}
