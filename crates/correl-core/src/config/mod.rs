//! Configuration system for correl.
//! TOML-based, 3-layer resolution: CLI > env > project file > defaults.

pub mod correl_config;

pub use correl_config::{CliOverrides, CorrelConfig};
