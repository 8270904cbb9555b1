//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all arguments and their documentation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::build;
use crate::config::ReportOutput;

/// Report the SHOWROOM rooms currently broadcasting
#[derive(Parser, Debug)]
#[command(name = "onlives")]
#[command(about = "Report the SHOWROOM rooms currently broadcasting")]
#[command(long_about = "
onlives fetches the list of rooms broadcasting on SHOWROOM right now, keeps
the rooms of one category and a set of genres, and reports them ordered by
broadcast start time, newest first.

EXAMPLES:
    # Report with the settings from a file
    onlives config.toml

    # Only official rooms in two genres
    onlives config.toml --category Official --genre アイドル --genre タレント・モデル

    # Print the report on stdout instead of the log
    onlives config.toml --output stdout

    # Build the report from a saved /api/live/onlives response
    onlives config.toml --snapshot onlives.json
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Configuration file path
    ///
    /// TOML file with [filter], [showroom], [report] and [logger] sections.
    /// The file must exist and be readable.
    #[arg(value_name = "CONFIG", value_parser = super::validation::validate_config_file_path)]
    pub config: PathBuf,

    /// Broadcast category: Free, Official or All
    ///
    /// Overrides `filter.category`. Any other value aborts the report.
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Genre to include (repeatable)
    ///
    /// When given, replaces the whole `filter.genres` list.
    #[arg(short, long = "genre", value_name = "GENRE", value_parser = super::validation::validate_genre)]
    pub genres: Vec<String>,

    /// Read the catalog from a saved JSON response instead of the network
    #[arg(long, value_name = "FILE", value_parser = super::validation::validate_snapshot_path)]
    pub snapshot: Option<PathBuf>,

    /// Where the report goes
    #[arg(short, long, value_enum)]
    pub output: Option<OutputTarget>,

    /// Log level override
    ///
    /// Takes precedence over --verbose/--quiet and the configuration file.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. A report sent to the log is
    /// hidden as well; combine with `--output stdout` to keep it.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Report output options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    #[value(name = "log")]
    Log,
    #[value(name = "stdout")]
    Stdout,
}

impl From<OutputTarget> for ReportOutput {
    fn from(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Log => ReportOutput::Log,
            OutputTarget::Stdout => ReportOutput::Stdout,
        }
    }
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn config_file() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        let path = path.to_str().unwrap().to_string();
        (dir, path)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let (_dir, path) = config_file();
        let cli = Cli::try_parse_from(["onlives", path.as_str()]).unwrap();

        assert_eq!(cli.config, PathBuf::from(&path));
        assert!(cli.category.is_none());
        assert!(cli.genres.is_empty());
        assert!(cli.snapshot.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_overrides() {
        let (_dir, path) = config_file();
        let cli = Cli::try_parse_from([
            "onlives",
            path.as_str(),
            "--category",
            "Official",
            "-g",
            "Idol",
            "--genre",
            "Talent",
            "--output",
            "stdout",
            "--log-level",
            "warning",
        ])
        .unwrap();

        assert_eq!(cli.category.as_deref(), Some("Official"));
        assert_eq!(cli.genres, ["Idol", "Talent"]);
        assert_eq!(cli.output, Some(OutputTarget::Stdout));
        assert_eq!(cli.log_level, Some(LogLevel::Warn));
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["onlives"]).is_err());
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let result = Cli::try_parse_from(["onlives", "/no/such/config.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let (_dir, path) = config_file();
        let result = Cli::try_parse_from(["onlives", path.as_str(), "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_genre_rejected() {
        let (_dir, path) = config_file();
        let result = Cli::try_parse_from(["onlives", path.as_str(), "--genre", " "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_into_string() {
        assert_eq!(String::from(LogLevel::Trace), "trace");
        assert_eq!(String::from(LogLevel::Warn), "warn");
    }
}
