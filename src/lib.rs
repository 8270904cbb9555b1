//! onlives
//!
//! Reports the SHOWROOM rooms that are broadcasting right now, filtered by
//! category and genre and ordered by start time.

use shadow_rs::shadow;
shadow!(build);

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod report;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
