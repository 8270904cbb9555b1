use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::catalog::{LiveRoom, RoomCatalog};

const BANNER: &str = "*****************************************************************";

/// One block of the report
#[derive(Debug, Clone, Copy)]
pub enum ReportSection<'a> {
    /// Genre count and rooms per genre of the fetched catalog
    CatalogSummary(&'a RoomCatalog),
    /// Number of rooms left after category extraction
    CategoryCount { category: &'a str, count: usize },
    /// Genres as configured and how many rooms they kept
    GenreSelection { genres: &'a [String], count: usize },
    /// A titled list of rooms, one line each
    RoomList {
        title: &'a str,
        rooms: &'a [LiveRoom],
    },
}

/// Render a section as text lines. Blank strings are spacer lines.
pub fn format_section(section: &ReportSection<'_>, tz: &TimeZone) -> Vec<String> {
    match section {
        ReportSection::CatalogSummary(catalog) => {
            let mut lines = vec![
                BANNER.to_string(),
                "Broadcasting rooms".to_string(),
                String::new(),
                format!("  genres = {}", catalog.buckets().len()),
                String::new(),
                "     rooms     genre  genre name".to_string(),
            ];
            lines.extend(catalog.buckets().iter().map(|bucket| {
                format!(
                    "{:>10}{:>10}  {}",
                    bucket.len(),
                    bucket.genre_id,
                    bucket.genre_name
                )
            }));
            lines
        }
        ReportSection::CategoryCount { category, count } => vec![
            String::new(),
            format!("rooms in category [{}] = {}", category, count),
            String::new(),
        ],
        ReportSection::GenreSelection { genres, count } => vec![
            BANNER.to_string(),
            "Broadcasting rooms by genre".to_string(),
            format!("  selected genres = [{}]", genres.join(", ")),
            String::new(),
            format!("  rooms in selected genres = {}", count),
        ],
        ReportSection::RoomList { title, rooms } => {
            let mut lines = vec![String::new(), format!("  *** {}", title)];
            lines.extend(rooms.iter().map(|room| format_room(room, tz)));
            lines
        }
    }
}

/// `  started at DD HH:MM:SS <name>` in the given zone
pub fn format_room(room: &LiveRoom, tz: &TimeZone) -> String {
    format!(
        "  started at {} {}",
        format_started_at(room.started_at, tz),
        room.main_name
    )
}

fn format_started_at(seconds: i64, tz: &TimeZone) -> String {
    match Timestamp::from_second(seconds) {
        Ok(ts) => ts.to_zoned(tz.clone()).strftime("%d %H:%M:%S").to_string(),
        Err(_) => seconds.to_string(),
    }
}
