//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override values loaded from the configuration file.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};
use std::path::Path;

/// Applies CLI overrides on top of file-based configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration from `config_path`
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(config_path: &Path) -> Result<Self, ConfigError> {
        let config = ConfigLoader::from_file(config_path).load()?;
        Ok(Self::new(config))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Precedence, highest first:
    /// 1. `--log-level`, then `--verbose` / `--quiet`
    /// 2. `--category`, `--genre`, `--output`
    /// 3. configuration file and environment
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_filter_overrides(&mut config, cli);
        self.apply_logging_overrides(&mut config, cli);

        if let Some(output) = cli.output {
            config.report.output = output.into();
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_filter_overrides(&self, config: &mut Settings, cli: &Cli) {
        if let Some(category) = &cli.category {
            config.filter.category = category.clone();
        }

        if !cli.genres.is_empty() {
            config.filter.genres = cli.genres.clone();
        }
    }

    fn apply_logging_overrides(&self, config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(level) = cli.log_level {
            config.logger.level = level.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportOutput;
    use clap::Parser;
    use tempfile::TempDir;

    fn base_config() -> Settings {
        let mut config = Settings::default();
        config.filter.category = "Free".to_string();
        config.filter.genres = vec!["Idol".to_string()];
        config
    }

    fn parse(args: &[&str]) -> (TempDir, Cli) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        let path = path.to_str().unwrap().to_string();

        let mut argv = vec!["onlives", path.as_str()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        (dir, cli)
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let (_dir, cli) = parse(&[]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged, base_config());
    }

    #[test]
    fn test_category_and_genres_override() {
        let (_dir, cli) = parse(&["--category", "Official", "-g", "Talent", "-g", "Music"]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();

        assert_eq!(merged.filter.category, "Official");
        assert_eq!(merged.filter.genres, ["Talent", "Music"]);
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let (_dir, cli) = parse(&["--category", "Bogus"]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.filter.category, "Bogus");
    }

    #[test]
    fn test_output_override() {
        let (_dir, cli) = parse(&["--output", "stdout"]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.report.output, ReportOutput::Stdout);
    }

    #[test]
    fn test_verbose_flag() {
        let (_dir, cli) = parse(&["--verbose"]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.logger.level, "debug");
    }

    #[test]
    fn test_quiet_flag() {
        let (_dir, cli) = parse(&["--quiet"]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.logger.level, "error");
    }

    #[test]
    fn test_log_level_overrides_verbose() {
        let (_dir, cli) = parse(&["--verbose", "--log-level", "warn"]);
        let merged = ConfigurationMerger::new(base_config())
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_from_config_path() {
        let _guard = crate::config::loader::tests::TEST_MUTEX.lock().unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[filter]\ncategory = \"Official\"\n").unwrap();

        let (_cli_dir, cli) = parse(&[]);
        let merged = ConfigurationMerger::from_config_path(&path)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();
        assert_eq!(merged.filter.category, "Official");
    }
}
