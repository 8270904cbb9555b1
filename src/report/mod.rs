//! Human-readable report of the selected rooms
//!
//! Formatting is a pure function of the room lists ([`format_section`]);
//! where the lines go is decided by a [`ReportRenderer`].

mod format;
mod renderer;

pub use format::{ReportSection, format_room, format_section};
pub use renderer::{LogRenderer, ReportRenderer, WriterRenderer};

use jiff::tz::TimeZone;

use crate::config::{ReportOutput, ReportSettings};
use crate::error::{AppError, AppResult};

/// Time zone for start times: the configured one, or the system zone.
pub fn resolve_timezone(settings: &ReportSettings) -> AppResult<TimeZone> {
    match &settings.timezone {
        Some(name) => TimeZone::get(name).map_err(|e| AppError::Configuration {
            key: "report.timezone".to_string(),
            source: e.into(),
        }),
        None => Ok(TimeZone::system()),
    }
}

/// Build the renderer selected by `[report] output`
pub fn renderer_for(settings: &ReportSettings) -> AppResult<Box<dyn ReportRenderer>> {
    let tz = resolve_timezone(settings)?;
    Ok(match settings.output {
        ReportOutput::Log => Box::new(LogRenderer::new(tz)),
        ReportOutput::Stdout => Box::new(WriterRenderer::new(std::io::stdout(), tz)),
    })
}
