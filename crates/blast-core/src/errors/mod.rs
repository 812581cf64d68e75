//! Error handling for the blast radius analyzer.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Every error here is a load-time failure. Once a catalog and its edge
//! model validate, scoring and blast-radius resolution are total.

pub mod catalog_error;
pub mod config_error;
pub mod edge_model_error;
pub mod error_code;
pub mod model_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use edge_model_error::{EdgeModelError, RbacViolation};
pub use error_code::BlastErrorCode;
pub use model_error::ModelError;
