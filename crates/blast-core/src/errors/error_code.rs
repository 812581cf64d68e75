//! BlastErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// the rendering layer can match on without parsing messages.
pub trait BlastErrorCode {
    /// Returns the error code string (e.g., "DEGENERATE_CATALOG").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DEGENERATE_CATALOG: &str = "DEGENERATE_CATALOG";
pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_RBAC_EDGE: &str = "INVALID_RBAC_EDGE";
pub const DUPLICATE_RBAC_EDGE: &str = "DUPLICATE_RBAC_EDGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
