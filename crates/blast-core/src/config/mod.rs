//! Configuration system.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.
//!
//! Every field is optional; the engine runs with no config file at all.

pub mod band_config;
pub mod blast_config;
pub mod controller_config;
pub mod scoring_config;

pub use band_config::BandConfig;
pub use blast_config::{BlastConfig, ConfigOverrides};
pub use controller_config::ControllerConfig;
pub use scoring_config::ScoringConfig;
