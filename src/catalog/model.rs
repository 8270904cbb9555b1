use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;

/// Platform-assigned broadcast category of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Free,
    Official,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Free => "Free",
            Category::Official => "Official",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter used when flattening a catalog.
///
/// `All` is only a selector; no room carries it as an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    Free,
    Official,
    All,
}

impl CategorySelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySelector::Free => "Free",
            CategorySelector::Official => "Official",
            CategorySelector::All => "All",
        }
    }

    /// Whether a room of the given category passes this selector
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelector::Free => category == Category::Free,
            CategorySelector::Official => category == Category::Official,
            CategorySelector::All => true,
        }
    }
}

impl FromStr for CategorySelector {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Free" => Ok(CategorySelector::Free),
            "Official" => Ok(CategorySelector::Official),
            "All" => Ok(CategorySelector::All),
            other => Err(CatalogError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One currently broadcasting room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRoom {
    pub room_id: u64,
    pub main_name: String,
    /// Broadcast start, seconds since the Unix epoch
    pub started_at: i64,
    pub genre_id: i64,
    pub genre_name: String,
    pub category: Category,
}

/// Rooms filed under one genre, in delivery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreBucket {
    pub genre_id: i64,
    pub genre_name: String,
    pub rooms: Vec<LiveRoom>,
}

impl GenreBucket {
    /// Build a bucket, filing every room under this bucket's genre.
    pub fn new(genre_id: i64, genre_name: impl Into<String>, rooms: Vec<LiveRoom>) -> Self {
        let genre_name = genre_name.into();
        let rooms = rooms
            .into_iter()
            .map(|room| LiveRoom {
                genre_id,
                genre_name: genre_name.clone(),
                ..room
            })
            .collect();

        Self {
            genre_id,
            genre_name,
            rooms,
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Snapshot of every broadcasting room, grouped by genre.
///
/// Bucket order is the order the platform delivered; it carries no meaning
/// but is preserved so later stages have a deterministic baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomCatalog {
    buckets: Vec<GenreBucket>,
}

impl RoomCatalog {
    pub fn new(buckets: Vec<GenreBucket>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &[GenreBucket] {
        &self.buckets
    }

    /// Total number of rooms across all buckets
    pub fn room_count(&self) -> usize {
        self.buckets.iter().map(GenreBucket::len).sum()
    }

    /// Rooms in bucket-then-room order
    pub fn rooms(&self) -> impl Iterator<Item = &LiveRoom> {
        self.buckets.iter().flat_map(|bucket| bucket.rooms.iter())
    }
}

/// Set of genre names selected for the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSet(BTreeSet<String>);

impl GenreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, genre_name: impl Into<String>) -> bool {
        self.0.insert(genre_name.into())
    }

    pub fn contains(&self, genre_name: &str) -> bool {
        self.0.contains(genre_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for GenreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
