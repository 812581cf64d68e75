//! Serializable view of the controller for renderers.

use blast_core::types::{AccessMode, NodeId};
use serde::Serialize;

use super::ModeController;
use crate::edges::Edge;
use crate::impact::{Compromise, RiskBand};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerSnapshot<'a> {
    pub mode: AccessMode,
    pub compromise: Option<&'a Compromise>,
    pub active_edges: &'a [Edge],
    /// Subset of `active_edges` on the blast path.
    pub blast_edges: Vec<&'a Edge>,
    pub risk_score: u8,
    pub risk_band: RiskBand,
    pub blast_radius: Vec<NodeId>,
    pub transition_ms: u64,
}

impl ModeController {
    pub fn snapshot(&self) -> ControllerSnapshot<'_> {
        ControllerSnapshot {
            mode: self.mode(),
            compromise: self.compromise(),
            active_edges: self.active_edges().edges(),
            blast_edges: self.blast_edges(),
            risk_score: self.risk_score(),
            risk_band: self.risk_band(),
            blast_radius: self.blast_radius(),
            transition_ms: self.transition_ms(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }
}
