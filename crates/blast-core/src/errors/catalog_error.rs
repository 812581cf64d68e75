//! Catalog construction and lookup errors.

use super::error_code::{self, BlastErrorCode};
use crate::types::NodeKind;

/// Errors that can occur while building or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Risk normalization is undefined without at least one node per side.
    #[error("Degenerate catalog: {identities} identities, {resources} resources (both must be non-empty)")]
    DegenerateCatalog { identities: usize, resources: usize },

    #[error("Duplicate node id: {id}")]
    DuplicateId { id: String },

    /// Lookup of an id that never came from the catalog. A programming
    /// error, never a user-facing condition.
    #[error("{kind} not found: {id}")]
    NotFound { kind: NodeKind, id: String },
}

impl BlastErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DegenerateCatalog { .. } => error_code::DEGENERATE_CATALOG,
            Self::DuplicateId { .. } => error_code::DUPLICATE_ID,
            Self::NotFound { .. } => error_code::NOT_FOUND,
        }
    }
}
