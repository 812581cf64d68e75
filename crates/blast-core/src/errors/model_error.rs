//! Top-level load error.

use super::error_code::BlastErrorCode;
use super::{CatalogError, ConfigError, EdgeModelError};

/// Errors that abort model initialization.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Edge model error: {0}")]
    EdgeModel(#[from] EdgeModelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BlastErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::EdgeModel(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
