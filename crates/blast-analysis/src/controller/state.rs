//! ModeController: the toggle / click state machine.

use std::sync::Arc;

use blast_core::config::BlastConfig;
use blast_core::errors::{CatalogError, ModelError};
use blast_core::events::{
    AccessEventHandler, ClearReason, CompromiseClearedEvent, CompromiseSetEvent, EventDispatcher,
    ModeToggledEvent,
};
use blast_core::types::{AccessMode, NodeId, NodeKind};

use crate::edges::{Edge, EdgeSet};
use crate::impact::{self, Compromise, IncidentReport, RiskBand, RiskReport};
use crate::model::AccessModel;

/// Holds the active mode and the at-most-one compromised node.
///
/// The risk score is cached per mode and refreshed on toggle; the blast
/// radius is recomputed on every read.
#[derive(Debug)]
pub struct ModeController {
    model: AccessModel,
    mode: AccessMode,
    compromise: Option<Compromise>,
    risk_score: u8,
    transition_ms: u64,
    dispatcher: EventDispatcher,
}

impl ModeController {
    /// Start in flat mode with nothing compromised.
    pub fn new(model: AccessModel) -> Self {
        Self::with_initial_mode(model, AccessMode::default())
    }

    pub fn with_initial_mode(model: AccessModel, mode: AccessMode) -> Self {
        let risk_score = model.score(mode);
        Self {
            model,
            mode,
            compromise: None,
            risk_score,
            transition_ms: blast_core::constants::TOGGLE_TRANSITION_MS,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Builtin model with weights, bands and initial mode from `config`.
    pub fn from_config(config: &BlastConfig) -> Result<Self, ModelError> {
        let model = AccessModel::from_config(config)?;
        let mode = config.controller.effective_initial_mode();
        let mut controller = Self::with_initial_mode(model, mode);
        controller.transition_ms = config.controller.effective_transition_ms();
        Ok(controller)
    }

    pub fn register_handler(&mut self, handler: Arc<dyn AccessEventHandler>) {
        self.dispatcher.register(handler);
    }

    // ---- Transitions ----

    /// Switch to the other access model. Always clears the compromise.
    pub fn toggle_mode(&mut self) {
        let from = self.mode;
        self.clear_with(ClearReason::ModeToggled);

        self.mode = from.toggled();
        self.risk_score = self.model.score(self.mode);

        tracing::debug!(
            from = %from,
            mode = %self.mode,
            risk_score = self.risk_score,
            "access mode toggled"
        );
        self.dispatcher.emit_mode_toggled(&ModeToggledEvent {
            from,
            to: self.mode,
            risk_score: self.risk_score,
        });
    }

    /// Mark `id` compromised, or clear it if it already is.
    ///
    /// Clicking a different node replaces the current compromise.
    pub fn click_node(&mut self, id: impl Into<NodeId>, kind: NodeKind) {
        let id = id.into();
        let reclicked = self
            .compromise
            .as_ref()
            .is_some_and(|c| c.origin_id == id);
        if reclicked {
            self.clear_with(ClearReason::Reclicked);
            return;
        }

        if self.model.catalog().kind_of(id.as_str()) != Some(kind) {
            tracing::warn!(origin = %id, kind = %kind, "compromised node is not a catalog node of this kind");
        }

        let replaced = self.compromise.take().map(|c| c.origin_id);
        let compromise = Compromise::new(id, kind);
        let reachable = impact::blast_radius(Some(&compromise), self.active_edges()).len();

        tracing::debug!(
            origin = %compromise.origin_id,
            kind = %kind,
            reachable_count = reachable,
            "compromise set"
        );
        self.dispatcher.emit_compromise_set(&CompromiseSetEvent {
            origin: compromise.origin_id.clone(),
            kind,
            replaced,
            reachable,
        });
        self.compromise = Some(compromise);
    }

    /// Drop the active compromise, if any.
    pub fn clear_compromise(&mut self) {
        self.clear_with(ClearReason::Explicit);
    }

    fn clear_with(&mut self, reason: ClearReason) {
        let Some(previous) = self.compromise.take() else {
            return;
        };
        tracing::debug!(origin = %previous.origin_id, reason = reason.name(), "compromise cleared");
        self.dispatcher.emit_compromise_cleared(&CompromiseClearedEvent {
            origin: previous.origin_id,
            reason,
        });
    }

    // ---- Outputs ----

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn compromise(&self) -> Option<&Compromise> {
        self.compromise.as_ref()
    }

    pub fn active_edges(&self) -> &EdgeSet {
        self.model.select_edges(self.mode)
    }

    pub fn risk_score(&self) -> u8 {
        self.risk_score
    }

    pub fn risk_band(&self) -> RiskBand {
        self.model.bands().classify(self.risk_score)
    }

    pub fn risk_report(&self) -> RiskReport {
        self.model.risk_report(self.mode)
    }

    pub fn blast_radius(&self) -> Vec<NodeId> {
        impact::blast_radius(self.compromise.as_ref(), self.active_edges())
    }

    pub fn blast_edges(&self) -> Vec<&Edge> {
        impact::blast_edges(self.compromise.as_ref(), self.active_edges())
    }

    /// Incident summary for the active compromise, `None` when nothing is
    /// compromised. `NotFound` if the compromised id is not in the catalog.
    pub fn incident_report(&self) -> Result<Option<IncidentReport>, CatalogError> {
        self.compromise
            .as_ref()
            .map(|c| {
                impact::incident_report(
                    c,
                    self.active_edges(),
                    self.model.catalog(),
                    self.model.weights(),
                )
            })
            .transpose()
    }

    /// Toggle animation length for the renderer. The controller never waits.
    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    pub fn model(&self) -> &AccessModel {
        &self.model
    }
}
