//! AccessEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing controller transitions.
///
/// Handlers only override the events they care about. A renderer typically
/// subscribes here to know when to redraw.
pub trait AccessEventHandler: Send + Sync {
    fn on_mode_toggled(&self, _event: &ModeToggledEvent) {}
    fn on_compromise_set(&self, _event: &CompromiseSetEvent) {}
    fn on_compromise_cleared(&self, _event: &CompromiseClearedEvent) {}
}
