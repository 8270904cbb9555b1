//! Broadcasting room report service.

use crate::catalog::{LiveRoom, extract_by_genre, sort_by_start_time_desc};
use crate::config::FilterSettings;
use crate::error::AppResult;
use crate::external::CatalogSource;
use crate::report::{ReportRenderer, ReportSection};

/// Runs one report: fetch, filter by category, filter by genre, sort.
pub struct OnliveService<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> OnliveService<'a> {
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    /// Build the report and hand each stage to `renderer`.
    ///
    /// Returns the selected rooms, newest broadcast first. An unknown
    /// category stops the run before any room is rendered.
    #[tracing::instrument(
        name = "onlive_report",
        skip_all,
        fields(platform = self.source.platform(), category = %filter.category)
    )]
    pub async fn run(
        &self,
        filter: &FilterSettings,
        renderer: &mut dyn ReportRenderer,
    ) -> AppResult<Vec<LiveRoom>> {
        let catalog = self.source.fetch_catalog().await?;
        renderer.render(&ReportSection::CatalogSummary(&catalog))?;

        let by_category = catalog.extract_by_category(&filter.category)?;
        renderer.render(&ReportSection::CategoryCount {
            category: &filter.category,
            count: by_category.len(),
        })?;

        let genres = filter.genre_set();
        let selected = extract_by_genre(&by_category, &genres);
        tracing::debug!(
            genres = genres.len(),
            kept = selected.len(),
            "Applied genre selection"
        );
        renderer.render(&ReportSection::GenreSelection {
            genres: &filter.genres,
            count: selected.len(),
        })?;
        renderer.render(&ReportSection::RoomList {
            title: "Rooms in selected genres",
            rooms: &selected,
        })?;

        let sorted = sort_by_start_time_desc(&selected);
        renderer.render(&ReportSection::RoomList {
            title: "Rooms in selected genres, newest first",
            rooms: &sorted,
        })?;

        Ok(sorted)
    }
}
