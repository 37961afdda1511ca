//! Configuration management module for cinelist
//!
//! This module provides configuration loading with support for:
//! - An optional TOML configuration file
//! - `CINELIST_*` environment variable overrides

pub mod error;
pub mod loader;
pub mod settings;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::Settings;
