//! Command executor for the report run
//!
//! Picks the catalog source and renderer from the parsed arguments and
//! merged settings, then runs the report.

use std::sync::Arc;

use super::parser::Cli;
use crate::catalog::LiveRoom;
use crate::config::Settings;
use crate::error::AppResult;
use crate::external::{
    CatalogSource, SessionCookies, ShowroomClient, StaticCatalog, load_snapshot,
};
use crate::report::{ReportRenderer, renderer_for};
use crate::services::OnliveService;

/// Execute the report with the given settings
///
/// Reads the catalog from `--snapshot` when given, otherwise fetches it
/// from SHOWROOM. With `showroom.account` set, the account's cookie file is
/// loaded before the request and saved afterwards, even if the run failed.
///
/// # Returns
/// The selected rooms, newest broadcast first
///
/// # Errors
/// Returns errors from the catalog source, category extraction, rendering
/// or saving the cookie file
pub async fn execute_command(cli: &Cli, settings: &Settings) -> AppResult<Vec<LiveRoom>> {
    let mut renderer = renderer_for(&settings.report)?;

    if let Some(path) = &cli.snapshot {
        tracing::info!(path = %path.display(), "Loading catalog snapshot");
        let source = StaticCatalog(load_snapshot(path)?);
        return run_report(&source, settings, renderer.as_mut()).await;
    }

    let cookies = Arc::new(session_cookies(settings)?);
    let client = ShowroomClient::new(&settings.showroom, Arc::clone(&cookies))?;

    let result = run_report(&client, settings, renderer.as_mut()).await;
    let saved = cookies.save();

    let rooms = result?;
    saved?;
    Ok(rooms)
}

fn session_cookies(settings: &Settings) -> AppResult<SessionCookies> {
    match settings.showroom.cookie_path() {
        Some(path) => SessionCookies::load(path),
        None => Ok(SessionCookies::in_memory()),
    }
}

async fn run_report(
    source: &dyn CatalogSource,
    settings: &Settings,
    renderer: &mut dyn ReportRenderer,
) -> AppResult<Vec<LiveRoom>> {
    tracing::debug!(
        platform = source.platform(),
        output = ?settings.report.output,
        "Starting report"
    );

    OnliveService::new(source)
        .run(&settings.filter, renderer)
        .await
}
