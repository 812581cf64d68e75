//! Event payload types emitted by the mode controller.

use crate::types::{AccessMode, NodeId, NodeKind};

/// Payload for `on_mode_toggled`.
#[derive(Debug, Clone)]
pub struct ModeToggledEvent {
    pub from: AccessMode,
    pub to: AccessMode,
    /// Risk score of the newly active edge set.
    pub risk_score: u8,
}

/// Payload for `on_compromise_set`.
#[derive(Debug, Clone)]
pub struct CompromiseSetEvent {
    pub origin: NodeId,
    pub kind: NodeKind,
    /// Compromise replaced by this one, if any.
    pub replaced: Option<NodeId>,
    /// Size of the blast radius under the active mode.
    pub reachable: usize,
}

/// Why an active compromise went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// The compromised node was clicked again.
    Reclicked,
    /// Explicit clear action.
    Explicit,
    /// The access mode switched.
    ModeToggled,
}

impl ClearReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reclicked => "reclicked",
            Self::Explicit => "explicit",
            Self::ModeToggled => "mode_toggled",
        }
    }
}

/// Payload for `on_compromise_cleared`.
#[derive(Debug, Clone)]
pub struct CompromiseClearedEvent {
    pub origin: NodeId,
    pub reason: ClearReason,
}
