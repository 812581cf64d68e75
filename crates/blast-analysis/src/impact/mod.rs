//! Impact analysis: weighted risk scoring, blast radius, incident reports.
//!
//! Everything here is a pure function of an edge set and the catalog.

pub mod blast_radius;
pub mod incident;
pub mod risk_score;
pub mod types;
pub mod weights;

pub use blast_radius::{blast_edges, blast_radius};
pub use incident::incident_report;
pub use risk_score::{actual_risk, max_possible_risk, risk_report, score};
pub use types::*;
pub use weights::{RiskBands, SensitivityWeights};
