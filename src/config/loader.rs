//! Configuration loader for cinelist
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from an optional TOML file and environment variables.

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable pointing at a configuration file
const CONFIG_FILE_ENV: &str = "CINELIST_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "CINELIST";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader.
///
/// Sources, in order of priority:
/// 1. Built-in defaults (serde defaults on `Settings`)
/// 2. TOML file from the CLI `--config` flag or `CINELIST_CONFIG_FILE`
/// 3. `CINELIST__*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration file path, when one was supplied
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    ///
    /// An explicitly supplied path (from the CLI) takes precedence over
    /// `CINELIST_CONFIG_FILE`.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        let config_file =
            config_file.or_else(|| std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from));
        Self { config_file }
    }

    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file does not exist, parsing
    /// fails, or the resulting settings fail validation.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(ConfigError::file_not_found(path.display().to_string()));
            }
            builder = builder.add_source(
                File::from(path.clone())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }
}
