//! AccessModel: catalog, both edge sets, and the scoring tables, validated
//! together at load.

use blast_core::config::BlastConfig;
use blast_core::errors::ModelError;
use blast_core::types::AccessMode;

use crate::catalog::{builtin, Catalog};
use crate::edges::{Edge, EdgeModel, EdgeSet};
use crate::impact::{self, RiskBands, RiskReport, SensitivityWeights};

/// Everything derived once at load. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct AccessModel {
    catalog: Catalog,
    edges: EdgeModel,
    weights: SensitivityWeights,
    bands: RiskBands,
}

impl AccessModel {
    pub fn new(
        catalog: Catalog,
        rbac_edges: Vec<Edge>,
        weights: SensitivityWeights,
        bands: RiskBands,
    ) -> Result<Self, ModelError> {
        let edges = EdgeModel::new(&catalog, rbac_edges)?;
        let model = Self {
            catalog,
            edges,
            weights,
            bands,
        };

        tracing::info!(
            identities = model.catalog.identity_count(),
            resources = model.catalog.resource_count(),
            flat_score = model.score(AccessMode::Flat),
            rbac_score = model.score(AccessMode::Rbac),
            "access model loaded"
        );

        Ok(model)
    }

    /// Demo catalog and grants with default weights and bands.
    pub fn builtin() -> Result<Self, ModelError> {
        Self::new(
            builtin::catalog()?,
            builtin::rbac_edges(),
            SensitivityWeights::default(),
            RiskBands::default(),
        )
    }

    /// Demo catalog and grants with weights and bands from `config`.
    pub fn from_config(config: &BlastConfig) -> Result<Self, ModelError> {
        Self::new(
            builtin::catalog()?,
            builtin::rbac_edges(),
            SensitivityWeights::from_config(&config.scoring)?,
            RiskBands::from_config(&config.bands)?,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn edges(&self) -> &EdgeModel {
        &self.edges
    }

    pub fn weights(&self) -> &SensitivityWeights {
        &self.weights
    }

    pub fn bands(&self) -> &RiskBands {
        &self.bands
    }

    pub fn select_edges(&self, mode: AccessMode) -> &EdgeSet {
        self.edges.select_edges(mode)
    }

    /// Risk score of the edge set for `mode`.
    pub fn score(&self, mode: AccessMode) -> u8 {
        impact::score(self.select_edges(mode).edges(), &self.catalog, &self.weights)
    }

    pub fn risk_report(&self, mode: AccessMode) -> RiskReport {
        impact::risk_report(
            self.select_edges(mode).edges(),
            &self.catalog,
            &self.weights,
            &self.bands,
        )
    }
}
