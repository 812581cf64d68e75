//! Mode controller transitions, outputs, events, and snapshots.

use std::sync::{Arc, Mutex};

use blast_analysis::impact::{Compromise, RiskBand};
use blast_analysis::{AccessModel, ModeController};
use blast_core::config::BlastConfig;
use blast_core::events::{
    AccessEventHandler, ClearReason, CompromiseClearedEvent, CompromiseSetEvent, ModeToggledEvent,
};
use blast_core::types::{AccessMode, NodeKind};

fn controller() -> ModeController {
    ModeController::new(AccessModel::builtin().unwrap())
}

/// Records every event as a short string.
#[derive(Default)]
struct RecordingHandler {
    log: Mutex<Vec<String>>,
}

impl RecordingHandler {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }
}

impl AccessEventHandler for RecordingHandler {
    fn on_mode_toggled(&self, event: &ModeToggledEvent) {
        self.log
            .lock()
            .unwrap()
            .push(format!("toggled {}->{} {}", event.from, event.to, event.risk_score));
    }

    fn on_compromise_set(&self, event: &CompromiseSetEvent) {
        let replaced = event
            .replaced
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        self.log.lock().unwrap().push(format!(
            "set {} {} replaced={} reachable={}",
            event.origin, event.kind, replaced, event.reachable
        ));
    }

    fn on_compromise_cleared(&self, event: &CompromiseClearedEvent) {
        self.log
            .lock()
            .unwrap()
            .push(format!("cleared {} {}", event.origin, event.reason.name()));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Initial state
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn starts_flat_with_nothing_compromised() {
    let c = controller();
    assert_eq!(c.mode(), AccessMode::Flat);
    assert!(c.compromise().is_none());
    assert_eq!(c.risk_score(), 100);
    assert_eq!(c.risk_band(), RiskBand::Critical);
    assert_eq!(c.active_edges().len(), 30);
    assert!(c.blast_radius().is_empty());
    assert!(c.incident_report().unwrap().is_none());
    assert_eq!(c.transition_ms(), 300);
}

#[test]
fn initial_mode_is_configurable() {
    let c = ModeController::with_initial_mode(AccessModel::builtin().unwrap(), AccessMode::Rbac);
    assert_eq!(c.mode(), AccessMode::Rbac);
    assert_eq!(c.risk_score(), 39);
}

#[test]
fn from_config_applies_controller_section() {
    let config = BlastConfig::from_toml(
        r#"
        [controller]
        initial_mode = "rbac"
        transition_ms = 150
        "#,
    )
    .unwrap();
    let c = ModeController::from_config(&config).unwrap();
    assert_eq!(c.mode(), AccessMode::Rbac);
    assert_eq!(c.transition_ms(), 150);
    assert_eq!(c.risk_band(), RiskBand::Elevated);
}

// ═══════════════════════════════════════════════════════════════════════════
// Transitions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn toggle_flips_mode_and_rescores() {
    let mut c = controller();
    c.toggle_mode();
    assert_eq!(c.mode(), AccessMode::Rbac);
    assert_eq!(c.risk_score(), 39);
    assert_eq!(c.active_edges().len(), 12);
    c.toggle_mode();
    assert_eq!(c.mode(), AccessMode::Flat);
    assert_eq!(c.risk_score(), 100);
}

#[test]
fn toggle_always_resets_compromise() {
    let mut c = controller();
    c.click_node("hr1", NodeKind::Identity);
    assert!(c.compromise().is_some());
    c.toggle_mode();
    assert!(c.compromise().is_none());
    assert!(c.blast_radius().is_empty());
}

#[test]
fn clicking_twice_clears() {
    let mut c = controller();
    c.click_node("codebase", NodeKind::Resource);
    assert_eq!(c.compromise(), Some(&Compromise::resource("codebase")));
    c.click_node("codebase", NodeKind::Resource);
    assert!(c.compromise().is_none());
}

#[test]
fn clicking_another_node_replaces() {
    let mut c = controller();
    c.click_node("hr1", NodeKind::Identity);
    c.click_node("aws", NodeKind::Resource);
    assert_eq!(c.compromise(), Some(&Compromise::resource("aws")));
    assert_eq!(c.blast_radius().len(), 6);
}

#[test]
fn clear_is_idempotent() {
    let mut c = controller();
    c.clear_compromise();
    assert!(c.compromise().is_none());
    c.click_node("ceo", NodeKind::Identity);
    c.clear_compromise();
    c.clear_compromise();
    assert!(c.compromise().is_none());
}

#[test]
fn blast_radius_follows_active_mode() {
    let mut c = controller();
    c.toggle_mode();
    c.click_node("hr1", NodeKind::Identity);
    assert_eq!(c.blast_radius(), ["payroll", "hrdb"]);
    assert_eq!(c.blast_edges().len(), 2);

    let report = c.incident_report().unwrap().unwrap();
    assert_eq!(report.exposed_weight, 6);
}

#[test]
fn unknown_node_yields_empty_radius_and_not_found_report() {
    let mut c = controller();
    c.click_node("intern", NodeKind::Identity);
    assert!(c.compromise().is_some());
    assert!(c.blast_radius().is_empty());
    assert!(c.incident_report().is_err());
}

#[test]
fn risk_report_tracks_mode() {
    let mut c = controller();
    assert_eq!(c.risk_report().score, 100);
    c.toggle_mode();
    let report = c.risk_report();
    assert_eq!(report.score, 39);
    assert_eq!(report.actual_risk, 26);
}

// ═══════════════════════════════════════════════════════════════════════════
// Events
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn transitions_emit_events_in_order() {
    let mut c = controller();
    let handler = Arc::new(RecordingHandler::default());
    c.register_handler(handler.clone());

    c.click_node("hr1", NodeKind::Identity);
    c.click_node("crm", NodeKind::Resource);
    c.toggle_mode();
    c.click_node("crm", NodeKind::Resource);
    c.click_node("crm", NodeKind::Resource);
    c.clear_compromise();

    assert_eq!(
        handler.take(),
        [
            "set hr1 identity replaced=- reachable=5",
            "set crm resource replaced=hr1 reachable=6",
            "cleared crm mode_toggled",
            "toggled flat->rbac 39",
            "set crm resource replaced=- reachable=3",
            "cleared crm reclicked",
        ]
    );
}

#[test]
fn explicit_clear_emits_reason() {
    let mut c = controller();
    let handler = Arc::new(RecordingHandler::default());
    c.register_handler(handler.clone());

    c.click_node("ceo", NodeKind::Identity);
    handler.take();
    c.clear_compromise();
    assert_eq!(handler.take(), ["cleared ceo explicit"]);
}

#[test]
fn toggle_without_compromise_emits_no_clear() {
    let mut c = controller();
    let handler = Arc::new(RecordingHandler::default());
    c.register_handler(handler.clone());

    c.toggle_mode();
    assert_eq!(handler.take(), ["toggled flat->rbac 39"]);
    assert_eq!(ClearReason::ModeToggled.name(), "mode_toggled");
}

// ═══════════════════════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn snapshot_reflects_state() {
    let mut c = controller();
    c.toggle_mode();
    c.click_node("codebase", NodeKind::Resource);

    let snap = c.snapshot();
    assert_eq!(snap.mode, AccessMode::Rbac);
    assert_eq!(snap.risk_score, 39);
    assert_eq!(snap.risk_band, RiskBand::Elevated);
    assert_eq!(snap.active_edges.len(), 12);
    assert_eq!(snap.blast_edges.len(), 2);
    assert_eq!(snap.blast_radius, ["itadmin1", "itadmin2"]);
}

#[test]
fn snapshot_json_is_renderer_friendly() {
    let mut c = controller();
    c.toggle_mode();
    c.click_node("hr1", NodeKind::Identity);

    let json: serde_json::Value = serde_json::from_str(&c.snapshot_json().unwrap()).unwrap();
    assert_eq!(json["mode"], "rbac");
    assert_eq!(json["risk_score"], 39);
    assert_eq!(json["risk_band"], "elevated");
    assert_eq!(json["compromise"]["origin_id"], "hr1");
    assert_eq!(json["compromise"]["origin_kind"], "identity");
    assert_eq!(json["blast_radius"], serde_json::json!(["payroll", "hrdb"]));
    assert_eq!(json["active_edges"][0]["from"], "ceo");
    assert_eq!(json["transition_ms"], 300);
}

#[test]
fn snapshot_without_compromise_has_null_origin() {
    let c = controller();
    let json: serde_json::Value = serde_json::from_str(&c.snapshot_json().unwrap()).unwrap();
    assert!(json["compromise"].is_null());
    assert_eq!(json["blast_radius"], serde_json::json!([]));
}
