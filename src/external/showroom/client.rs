use std::sync::Arc;

use super::types::OnlivesResponse;
use crate::catalog::RoomCatalog;
use crate::config::ShowroomSettings;
use crate::error::{AppError, AppResult};
use crate::external::client::build_http_client;
use crate::external::cookies::SessionCookies;
use crate::external::source::CatalogSource;
use async_trait::async_trait;

const ONLIVES_PATH: &str = "/api/live/onlives";

/// Client for the public SHOWROOM live API
pub struct ShowroomClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShowroomClient {
    /// Client whose cookies go to `cookies`
    pub fn new(settings: &ShowroomSettings, cookies: Arc<SessionCookies>) -> AppResult<Self> {
        Ok(Self::with_client(
            build_http_client(settings, cookies)?,
            &settings.base_url,
        ))
    }

    /// Use an already configured HTTP client
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn onlives_url(&self) -> String {
        format!("{}{}", self.base_url, ONLIVES_PATH)
    }

    fn make_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::ExternalApi {
            platform: "showroom".into(),
            message: message.into(),
            source,
        }
    }
}

#[async_trait]
impl CatalogSource for ShowroomClient {
    fn platform(&self) -> &'static str {
        "showroom"
    }

    async fn fetch_catalog(&self) -> AppResult<RoomCatalog> {
        let url = self.onlives_url();
        tracing::debug!(%url, "Fetching broadcasting rooms");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::make_error(
                    format!("fetch_catalog request failed: {}", e),
                    Some(e.into()),
                )
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("fetch_catalog HTTP error: {}", e), Some(e.into()))
            })?;

        let data: OnlivesResponse = resp.json().await.map_err(|e: reqwest::Error| {
            Self::make_error(format!("fetch_catalog invalid JSON: {}", e), Some(e.into()))
        })?;

        let catalog = RoomCatalog::from(data);
        tracing::debug!(
            genres = catalog.buckets().len(),
            rooms = catalog.room_count(),
            "Fetched catalog"
        );
        Ok(catalog)
    }
}
