//! Edge model validation errors.

use std::fmt;

use super::error_code::{self, BlastErrorCode};

/// Why a curated RBAC grant was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbacViolation {
    UnknownIdentity,
    UnknownResource,
    /// Both ids exist but the pair is missing from the flat cross product.
    NotInFlatSet,
}

impl RbacViolation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnknownIdentity => "unknown identity",
            Self::UnknownResource => "unknown resource",
            Self::NotInFlatSet => "not a member of the flat edge set",
        }
    }
}

impl fmt::Display for RbacViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while validating the curated RBAC edge table.
/// Both are fatal configuration errors: the table is static.
#[derive(Debug, thiserror::Error)]
pub enum EdgeModelError {
    #[error("Invalid RBAC edge {from} -> {to}: {violation}")]
    InvalidRbacEdge {
        from: String,
        to: String,
        violation: RbacViolation,
    },

    #[error("Duplicate RBAC edge {from} -> {to}")]
    DuplicateRbacEdge { from: String, to: String },
}

impl BlastErrorCode for EdgeModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRbacEdge { .. } => error_code::INVALID_RBAC_EDGE,
            Self::DuplicateRbacEdge { .. } => error_code::DUPLICATE_RBAC_EDGE,
        }
    }
}
