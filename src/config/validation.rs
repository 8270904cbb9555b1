//! Configuration validation logic
//!
//! Range and format checks for every settings section. The filter category
//! is left alone: an unknown selector is a catalog error, reported when the
//! report is built.

use crate::config::error::ConfigError;
use crate::config::settings::{
    FileSettings, LoggerSettings, ReportSettings, Settings, ShowroomSettings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ShowroomSettings {
    /// Validate SHOWROOM client configuration
    ///
    /// # Validation Rules
    /// - Base URL must be an http(s) URL
    /// - Both timeouts must be greater than 0
    /// - An account name must be usable as a file name
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::invalid(
                "showroom.base_url",
                "Base URL is required.",
            ));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "showroom.base_url".to_string(),
                message: format!("Base URL must start with http:// or https://, got '{}'", url),
            });
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::invalid(
                "showroom.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::invalid(
                "showroom.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if let Some(account) = &self.account {
            if account.trim().is_empty()
                || account.contains(['/', '\\'])
                || account.starts_with('.')
            {
                return Err(ConfigError::Invalid {
                    field: "showroom.account".to_string(),
                    message: format!("Account '{}' cannot be used as a cookie file name", account),
                });
            }

            if self.cookie_dir.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "showroom.cookie_dir",
                    "Cookie directory is required when an account is set.",
                ));
            }
        }

        Ok(())
    }
}

impl ReportSettings {
    /// Validate report configuration
    ///
    /// The time zone, when set, must be known to the tz database.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.timezone
            && jiff::tz::TimeZone::get(name).is_err()
        {
            return Err(ConfigError::Invalid {
                field: "report.timezone".to_string(),
                message: format!("Unknown time zone '{}'", name),
            });
        }
        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console or file output is enabled
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::invalid(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.showroom.validate()?;
        self.report.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ConsoleSettings;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::Invalid { field, .. } => field,
            other => panic!("Expected Invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_category_is_not_a_config_error() {
        let mut settings = Settings::default();
        settings.filter.category = "Bogus".into();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_showroom_empty_base_url() {
        let config = ShowroomSettings {
            base_url: "  ".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "showroom.base_url");
    }

    #[test]
    fn test_showroom_base_url_scheme() {
        let config = ShowroomSettings {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "showroom.base_url");

        let config = ShowroomSettings {
            base_url: "http://127.0.0.1:8080".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_showroom_zero_timeouts() {
        let config = ShowroomSettings {
            request_timeout: 0,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "showroom.request_timeout"
        );

        let config = ShowroomSettings {
            connect_timeout: 0,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "showroom.connect_timeout"
        );
    }

    #[test]
    fn test_showroom_account_names() {
        for bad in ["", "  ", "../alice", "a/b", ".hidden"] {
            let config = ShowroomSettings {
                account: Some(bad.into()),
                ..Default::default()
            };
            assert_eq!(field_of(config.validate().unwrap_err()), "showroom.account");
        }

        let config = ShowroomSettings {
            account: Some("alice".into()),
            cookie_dir: " ".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "showroom.cookie_dir");

        let config = ShowroomSettings {
            account: Some("alice".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_report_timezone() {
        let config = ReportSettings {
            timezone: Some("Asia/Tokyo".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = ReportSettings {
            timezone: Some("Mars/Olympus_Mons".into()),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "report.timezone");
    }

    #[test]
    fn test_logger_invalid_level() {
        let config = LoggerSettings {
            level: "verbose".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "logger.level");
    }

    #[test]
    fn test_logger_level_case_insensitive() {
        let config = LoggerSettings {
            level: "WARN".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logger_requires_an_output() {
        let config = LoggerSettings {
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            file: FileSettings {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "logger");
    }

    #[test]
    fn test_logger_file_path_required() {
        let config = LoggerSettings {
            file: FileSettings {
                path: "".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "logger.file.path");
    }

    #[test]
    fn test_logger_file_format() {
        let config = LoggerSettings {
            file: FileSettings {
                format: "yaml".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "logger.file.format");
    }
}
