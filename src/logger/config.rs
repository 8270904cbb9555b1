//! Checked logger settings
//!
//! Built from `[logger]` by `LoggerSettings::into_logger_config`; a value of
//! these types has already passed validation.

use anyhow::Result;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: Level,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl LoggerConfig {
    /// `level` is one of trace, debug, info, warn, error in any case.
    /// Fails when both outputs are disabled.
    pub fn new(level: &str, console: ConsoleConfig, file: FileConfig) -> Result<Self> {
        let level = parse_level(level)?;
        if !console.enabled && !file.enabled {
            anyhow::bail!("At least one output (console or file) must be enabled");
        }
        Ok(Self {
            level,
            console,
            file,
        })
    }

    /// Filter passing events at `level` and above
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level).into())
            .parse_lossy("")
    }
}

fn parse_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
            level
        ),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI colors, only applied when stdout is a terminal
    pub colored: bool,
}

/// Log file output
///
/// `path` may contain a `{timestamp}` placeholder, replaced with the local
/// start time of the run (`YYYYmmdd_HHMMSS`) so every run gets its own file.
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub append: bool,
    pub format: LogFormat,
}

impl FileConfig {
    pub fn new(enabled: bool, path: PathBuf, append: bool, format: LogFormat) -> Result<Self> {
        if enabled && path.as_os_str().is_empty() {
            anyhow::bail!("File path cannot be empty when file output is enabled");
        }
        Ok(Self {
            enabled,
            path,
            append,
            format,
        })
    }
}

/// Layout of lines in the log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            ),
        }
    }
}
