//! Mode controller: owns the active access mode and compromise selection.

pub mod snapshot;
pub mod state;

pub use snapshot::ControllerSnapshot;
pub use state::ModeController;
