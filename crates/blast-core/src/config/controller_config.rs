//! Mode controller configuration.

use serde::{Deserialize, Serialize};

use crate::constants::TOGGLE_TRANSITION_MS;
use crate::types::AccessMode;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Mode the controller starts in. Default: flat.
    pub initial_mode: Option<AccessMode>,
    /// Toggle transition the renderer should animate, in ms. Default: 300.
    pub transition_ms: Option<u64>,
}

impl ControllerConfig {
    pub fn effective_initial_mode(&self) -> AccessMode {
        self.initial_mode.unwrap_or_default()
    }

    pub fn effective_transition_ms(&self) -> u64 {
        self.transition_ms.unwrap_or(TOGGLE_TRANSITION_MS)
    }
}
