//! Configuration loader for onlives
//!
//! This module provides the `ConfigLoader` struct that reads the settings
//! file and overlays environment variable overrides.

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ONLIVES";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Keys whose environment value is a comma-separated list
const ENV_LIST_KEYS: &[&str] = &["filter.genres"];

/// Configuration loader
///
/// Sources, lowest priority first:
/// 1. the TOML settings file
/// 2. `ONLIVES_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    config_file: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given settings file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: path.into(),
        }
    }

    /// Load, deserialize and validate the settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the settings file does not exist
    /// - parsing or deserialization fails
    /// - validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config
            .try_deserialize()
            .map_err(|source| self.load_error(source))?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        if !self.config_file.is_file() {
            return Err(ConfigError::MissingFile {
                path: self.config_file.clone(),
            });
        }

        let builder = Config::builder().add_source(
            File::new(
                self.config_file.to_str().unwrap_or_default(),
                FileFormat::Toml,
            )
            .required(true),
        );

        // Environment variables always win
        let builder = Self::add_env_source(builder);

        builder.build().map_err(|source| self.load_error(source))
    }

    fn load_error(&self, source: config::ConfigError) -> ConfigError {
        ConfigError::Load {
            path: self.config_file.clone(),
            source,
        }
    }

    /// Environment variables with prefix `ONLIVES_` map to configuration keys,
    /// `__` separating nested keys:
    ///
    /// - `ONLIVES_FILTER__CATEGORY` -> `filter.category`
    /// - `ONLIVES_SHOWROOM__REQUEST_TIMEOUT` -> `showroom.request_timeout`
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        let env = ENV_LIST_KEYS.iter().fold(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true)
                .list_separator(","),
            |env, key| env.with_list_parse_key(key),
        );

        builder.add_source(env)
    }
}
