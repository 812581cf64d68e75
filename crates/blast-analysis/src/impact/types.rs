//! Impact analysis types: compromise origin, risk bands, reports.

use blast_core::types::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

use crate::catalog::Sensitivity;

/// The single node currently marked as compromised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compromise {
    pub origin_id: NodeId,
    pub origin_kind: NodeKind,
}

impl Compromise {
    pub fn new(origin_id: impl Into<NodeId>, origin_kind: NodeKind) -> Self {
        Self {
            origin_id: origin_id.into(),
            origin_kind,
        }
    }

    pub fn identity(id: impl Into<NodeId>) -> Self {
        Self::new(id, NodeKind::Identity)
    }

    pub fn resource(id: impl Into<NodeId>) -> Self {
        Self::new(id, NodeKind::Resource)
    }
}

/// Coarse classification of a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Elevated,
    Critical,
}

impl RiskBand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Elevated => "elevated",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of edges landing on each sensitivity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SensitivityCounts {
    pub fn add(&mut self, sensitivity: Sensitivity) {
        match sensitivity {
            Sensitivity::High => self.high += 1,
            Sensitivity::Medium => self.medium += 1,
            Sensitivity::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Breakdown of a risk score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Normalized score, 0-100.
    pub score: u8,
    pub band: RiskBand,
    /// Sum of target weights over the scored edges.
    pub actual_risk: u64,
    /// Flat-model ceiling: identities × Σ resource weights.
    pub max_possible_risk: u64,
    /// Scored edges per target sensitivity. Unknown targets are not counted.
    pub edges_by_sensitivity: SensitivityCounts,
}

/// One node exposed by a compromise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposedNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    /// Present for resources.
    pub sensitivity: Option<Sensitivity>,
}

/// Summary of an active compromise under one access model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub origin: Compromise,
    pub origin_label: String,
    /// Exposed counterpart nodes, in blast-radius order.
    pub exposed: Vec<ExposedNode>,
    /// Σ sensitivity weights of exposed resources. Zero for resource origins.
    pub exposed_weight: u64,
}

impl IncidentReport {
    /// No lateral movement possible from the origin.
    pub fn is_isolated(&self) -> bool {
        self.exposed.is_empty()
    }

    pub fn exposed_count(&self) -> usize {
        self.exposed.len()
    }
}
