use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::error::ConfigError;

/// Application-wide error type.
///
/// The catalog contributes a single error kind; everything else comes from
/// the collaborators around it (configuration, the remote platform, report
/// output).
#[derive(Error, Debug)]
pub enum AppError {
    /// Catalog operation rejected its input
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Remote platform request failed
    #[error("External API error ({platform}): {message}")]
    ExternalApi {
        platform: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Report could not be written
    #[error("Report output failed: {message}")]
    Report {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: error.key(),
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
