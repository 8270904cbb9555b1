use std::sync::Arc;
use std::time::Duration;

use super::cookies::SessionCookies;
use super::user_agent::random_user_agent;
use crate::config::ShowroomSettings;
use crate::error::{AppError, AppResult};

/// Build the HTTP client used for one run.
///
/// # Features
/// - **Timeouts**: request and connect timeouts from `[showroom]` settings
/// - **Compression**: gzip, deflate, brotli and zstd
/// - **Cookie store**: `cookies`, shared so the caller can save it afterwards
/// - **User-Agent**: a random desktop Chrome string
/// - **TLS**: Rustls, no OpenSSL dependency
pub fn build_http_client(
    settings: &ShowroomSettings,
    cookies: Arc<SessionCookies>,
) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout))
        .connect_timeout(Duration::from_secs(settings.connect_timeout))
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .use_rustls_tls()
        .cookie_provider(cookies)
        .user_agent(random_user_agent())
        .build()
        .map_err(|e| AppError::Configuration {
            key: "showroom".to_string(),
            source: e.into(),
        })
}
