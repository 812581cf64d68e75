//! Structured span and event field names.
//!
//! Shared so log queries work the same across both crates.

/// Active access mode (`flat` / `rbac`).
pub const MODE: &str = "mode";

/// Normalized risk score (0-100).
pub const RISK_SCORE: &str = "risk_score";

/// Compromise origin node id.
pub const ORIGIN: &str = "origin";

/// Number of nodes in a blast radius.
pub const REACHABLE_COUNT: &str = "reachable_count";

/// Number of edges in an edge set.
pub const EDGE_COUNT: &str = "edge_count";
