//! blast-analysis: the access-graph engine.
//!
//! A fixed catalog of identities and resources, two edge sets over it (flat
//! cross product and curated RBAC grants), a sensitivity-weighted risk score,
//! one-hop blast-radius resolution, and the mode controller that ties them to
//! user actions.

pub mod catalog;
pub mod controller;
pub mod edges;
pub mod impact;
pub mod model;

pub use catalog::{Catalog, Identity, Resource, Role, Sensitivity};
pub use controller::{ControllerSnapshot, ModeController};
pub use edges::{Edge, EdgeModel, EdgeSet};
pub use impact::{Compromise, IncidentReport, RiskBand, RiskBands, RiskReport, SensitivityWeights};
pub use model::AccessModel;
