//! Configuration management for onlives
//!
//! Settings come from a single TOML file named on the command line. Any key
//! can then be overridden with an `ONLIVES_*` environment variable, using
//! `__` between nested keys:
//!
//! - `ONLIVES_FILTER__CATEGORY=Official` -> `filter.category`
//! - `ONLIVES_FILTER__GENRES=Idol,Talent` -> `filter.genres`
//! - `ONLIVES_LOGGER__LEVEL=debug` -> `logger.level`

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{FilterSettings, ReportOutput, ReportSettings, Settings, ShowroomSettings};
