//! Room catalog domain model
//!
//! A [`RoomCatalog`] is the snapshot of every room currently broadcasting,
//! grouped by genre in the order the platform delivered them. The
//! operations in this module never mutate the catalog; each one returns a
//! freshly built room list:
//!
//! - [`RoomCatalog::extract_by_category`] flattens the catalog and keeps one
//!   broadcast category (or all of them)
//! - [`extract_by_genre`] keeps rooms whose genre is in a [`GenreSet`]
//! - [`sort_by_start_time_desc`] orders rooms by start time, newest first

mod error;
mod extract;
mod model;
mod sort;

pub use error::CatalogError;
pub use extract::extract_by_genre;
pub use model::{Category, CategorySelector, GenreBucket, GenreSet, LiveRoom, RoomCatalog};
pub use sort::sort_by_start_time_desc;
