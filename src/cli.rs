//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap.
//! Parsed flags are applied as overrides on top of the loaded settings.

use std::path::PathBuf;

use clap::Parser;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

use crate::config::Settings;

/// An in-memory film and user catalog API server
#[derive(Parser, Debug)]
#[command(name = "cinelist")]
#[command(about = "An in-memory film and user catalog API server")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the defaults.
    /// The file should be in TOML format.
    ///
    /// Example: --config /etc/cinelist/production.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the server host from configuration
    #[arg(long)]
    pub host: Option<String>,

    /// Override the server port from configuration
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Applies CLI flags on top of the loaded settings.
    ///
    /// CLI flags have the highest priority of all configuration sources.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if self.verbose {
            settings.logger.level = "debug".to_string();
        }
        if self.quiet {
            settings.logger.level = "error".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["cinelist"]).expect("should parse");
        assert!(cli.config.is_none());
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_host_and_port_overrides() {
        let cli = Cli::try_parse_from(["cinelist", "--host", "0.0.0.0", "--port", "9090"])
            .expect("should parse");

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
    }

    #[test]
    fn test_verbose_sets_debug_level() {
        let cli = Cli::try_parse_from(["cinelist", "--verbose"]).expect("should parse");
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_quiet_sets_error_level() {
        let cli = Cli::try_parse_from(["cinelist", "--quiet"]).expect("should parse");
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.logger.level, "error");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["cinelist", "--verbose", "--quiet"]).is_err());
    }
}
