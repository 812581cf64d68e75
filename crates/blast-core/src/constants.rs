//! Shared constants for the blast radius analyzer.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default weight of a High sensitivity resource.
pub const DEFAULT_HIGH_WEIGHT: u32 = 3;

/// Default weight of a Medium sensitivity resource.
pub const DEFAULT_MEDIUM_WEIGHT: u32 = 2;

/// Default weight of a Low sensitivity resource.
pub const DEFAULT_LOW_WEIGHT: u32 = 1;

/// Upper bound of a normalized risk score.
pub const MAX_RISK_SCORE: u8 = 100;

/// Scores strictly above this are at least `Elevated`.
pub const DEFAULT_ELEVATED_ABOVE: u8 = 30;

/// Scores strictly above this are `Critical`.
pub const DEFAULT_CRITICAL_ABOVE: u8 = 60;

/// Cosmetic delay the renderer applies around a mode toggle, in milliseconds.
/// The engine never waits on it.
pub const TOGGLE_TRANSITION_MS: u64 = 300;

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "blast.toml";
