use super::error::CatalogError;
use super::model::{CategorySelector, GenreSet, LiveRoom, RoomCatalog};

impl RoomCatalog {
    /// Flatten the catalog into rooms of one category.
    ///
    /// `category` is one of `Free`, `Official` or `All`. Buckets are visited
    /// in catalog order and rooms in bucket order, so the result preserves
    /// delivery order with genre grouping erased.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidCategory`] for any other selector.
    pub fn extract_by_category(&self, category: &str) -> Result<Vec<LiveRoom>, CatalogError> {
        let selector: CategorySelector = category.parse()?;
        Ok(self.rooms_in(selector))
    }

    /// Typed form of [`RoomCatalog::extract_by_category`]
    pub fn rooms_in(&self, selector: CategorySelector) -> Vec<LiveRoom> {
        self.rooms()
            .filter(|room| selector.matches(room.category))
            .cloned()
            .collect()
    }
}

/// Keep the rooms whose genre name is in `genres`, preserving order.
///
/// An empty set selects nothing.
pub fn extract_by_genre(rooms: &[LiveRoom], genres: &GenreSet) -> Vec<LiveRoom> {
    rooms
        .iter()
        .filter(|room| genres.contains(&room.genre_name))
        .cloned()
        .collect()
}
