use std::path::PathBuf;

use thiserror::Error;

/// Why the settings could not be produced
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    /// Unreadable TOML, a bad environment value, or a type mismatch
    #[error("cannot load settings from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    /// A value was read but is out of range, e.g. `showroom.request_timeout = 0`
    #[error("invalid {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The dotted settings key or the file the error is about
    pub fn key(&self) -> String {
        match self {
            ConfigError::MissingFile { path } | ConfigError::Load { path, .. } => {
                path.display().to_string()
            }
            ConfigError::Invalid { field, .. } => field.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_names_its_field() {
        let err = ConfigError::invalid("filter.genres", "must not be empty");
        assert_eq!(err.key(), "filter.genres");
        assert_eq!(err.to_string(), "invalid filter.genres: must not be empty");
    }

    #[test]
    fn test_missing_file_names_its_path() {
        let err = ConfigError::MissingFile {
            path: PathBuf::from("conf/onlives.toml"),
        };
        assert_eq!(err.key(), "conf/onlives.toml");
        assert!(err.to_string().contains("does not exist"));
    }
}
