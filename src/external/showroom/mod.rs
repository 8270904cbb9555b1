mod client;
mod types;

pub use client::ShowroomClient;
pub use types::{OnliveGenre, OnliveRoom, OnlivesResponse};

use std::path::Path;

use crate::catalog::RoomCatalog;
use crate::error::{AppError, AppResult};

/// Read a saved `/api/live/onlives` response from disk.
pub fn load_snapshot(path: &Path) -> AppResult<RoomCatalog> {
    let make_error = |message: String, source: anyhow::Error| AppError::ExternalApi {
        platform: "showroom".into(),
        message,
        source: Some(source),
    };

    let body = std::fs::read_to_string(path).map_err(|e| {
        make_error(
            format!("cannot read snapshot {}: {}", path.display(), e),
            e.into(),
        )
    })?;
    let response: OnlivesResponse = serde_json::from_str(&body).map_err(|e| {
        make_error(
            format!("invalid snapshot {}: {}", path.display(), e),
            e.into(),
        )
    })?;

    Ok(RoomCatalog::from(response))
}
