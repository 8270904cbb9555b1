use std::io::Write;

use jiff::tz::TimeZone;

use super::format::{ReportSection, format_section};
use crate::error::{AppError, AppResult};

/// Turns report sections into output
pub trait ReportRenderer {
    fn render(&mut self, section: &ReportSection<'_>) -> AppResult<()>;
}

/// Emits every report line through `tracing` at INFO level, so the report
/// lands in the same console and log file as the rest of the run.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    tz: TimeZone,
}

impl LogRenderer {
    pub fn new(tz: TimeZone) -> Self {
        Self { tz }
    }
}

impl ReportRenderer for LogRenderer {
    fn render(&mut self, section: &ReportSection<'_>) -> AppResult<()> {
        for line in format_section(section, &self.tz) {
            tracing::info!("{}", line);
        }
        Ok(())
    }
}

/// Writes plain report lines to any writer, typically stdout
#[derive(Debug)]
pub struct WriterRenderer<W: Write> {
    writer: W,
    tz: TimeZone,
}

impl<W: Write> WriterRenderer<W> {
    pub fn new(writer: W, tz: TimeZone) -> Self {
        Self { writer, tz }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportRenderer for WriterRenderer<W> {
    fn render(&mut self, section: &ReportSection<'_>) -> AppResult<()> {
        let write_error = |e: std::io::Error| AppError::Report {
            message: e.to_string(),
            source: Some(e),
        };

        for line in format_section(section, &self.tz) {
            writeln!(self.writer, "{}", line).map_err(write_error)?;
        }
        self.writer.flush().map_err(write_error)
    }
}
