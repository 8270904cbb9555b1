use thiserror::Error;

/// Errors raised by catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The category selector is not one of `Free`, `Official`, `All`
    #[error("Invalid category '{0}'. Valid values are: Free, Official, All")]
    InvalidCategory(String),
}
