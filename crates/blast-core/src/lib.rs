//! blast-core: shared foundation for the blast radius analyzer.
//!
//! Errors, layered TOML configuration, the event system, tracing setup,
//! typed identifiers, and constants. The engine itself lives in
//! `blast-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
