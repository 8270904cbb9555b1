//! Configuration settings structures for onlives
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::GenreSet;
use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_category() -> String {
    "All".to_string()
}

fn default_base_url() -> String {
    "https://www.showroom-live.com".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_cookie_dir() -> String {
    "cookies".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/onlives.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Filter Configuration
// ============================================================================

/// Which rooms end up in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Broadcast category: "Free", "Official" or "All".
    ///
    /// Kept as a raw string; the catalog decides whether it is valid.
    #[serde(default = "default_category")]
    pub category: String,

    /// Genre names to keep, e.g. ["アイドル", "タレント・モデル"]
    #[serde(default)]
    pub genres: Vec<String>,
}

impl FilterSettings {
    /// Collapse the configured genre list into a set
    ///
    /// Names are trimmed and blank entries dropped, so `"Idol, Talent"`
    /// from an environment list selects the same genres as the file.
    pub fn genre_set(&self) -> GenreSet {
        self.genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .collect()
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            category: default_category(),
            genres: Vec::new(),
        }
    }
}

// ============================================================================
// SHOWROOM Client Configuration
// ============================================================================

/// HTTP settings for the SHOWROOM API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowroomSettings {
    /// API base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Account whose session cookies are kept between runs.
    /// Cookies live only in memory when unset.
    #[serde(default)]
    pub account: Option<String>,

    /// Directory holding one `<account>.json` cookie file per account
    #[serde(default = "default_cookie_dir")]
    pub cookie_dir: String,
}

impl ShowroomSettings {
    /// Cookie file for the configured account, if any
    pub fn cookie_path(&self) -> Option<PathBuf> {
        self.account
            .as_deref()
            .map(|account| Path::new(&self.cookie_dir).join(format!("{}.json", account)))
    }
}

impl Default for ShowroomSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            account: None,
            cookie_dir: default_cookie_dir(),
        }
    }
}

// ============================================================================
// Report Configuration
// ============================================================================

/// Where report lines go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportOutput {
    /// Through the logger, like every other message
    #[default]
    Log,
    /// Plain lines on stdout
    Stdout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub output: ReportOutput,

    /// IANA time zone for start times, e.g. "Asia/Tokyo". System zone if unset.
    #[serde(default)]
    pub timezone: Option<String>,
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Path to the log file; `{timestamp}` expands to the run start time
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = ConsoleConfig {
            enabled: self.console.enabled,
            colored: self.console.colored,
        };
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(&self.level, console_config, file_config).map_err(|e| {
            ConfigError::Invalid {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self.parse_format()?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::Invalid {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }

    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::Invalid {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// Built once at startup and passed down read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub filter: FilterSettings,

    #[serde(default)]
    pub showroom: ShowroomSettings,

    #[serde(default)]
    pub report: ReportSettings,

    #[serde(default)]
    pub logger: LoggerSettings,
}
