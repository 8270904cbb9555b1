//! CLI module for onlives
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config file)
//! - Report execution

pub mod config_merger;
pub mod executor;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, LogLevel, OutputTarget};

use crate::config::Settings;
use crate::config::error::ConfigError;
use crate::logger::init_logger;

/// Load and merge configuration from CLI arguments
///
/// 1. Load base configuration from the file and environment
/// 2. Merge CLI argument overrides
/// 3. Validate the final configuration
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> Result<Settings, ConfigError> {
    let merger = ConfigurationMerger::from_config_path(&cli.config)?;
    merger.merge_cli_args(cli)
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if the logger configuration is invalid or a global
/// subscriber is already installed
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}
