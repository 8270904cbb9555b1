use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use cookie_store::{CookieStore, RawCookie};
use reqwest::Url;
use reqwest::header::HeaderValue;

use crate::error::{AppError, AppResult};

/// Session cookies shared with the HTTP client.
///
/// Backed by a JSON file when created with [`SessionCookies::load`], so a
/// session started in one run is still valid in the next.
#[derive(Debug)]
pub struct SessionCookies {
    store: RwLock<CookieStore>,
    path: Option<PathBuf>,
}

impl SessionCookies {
    /// Cookies that vanish with the process
    pub fn in_memory() -> Self {
        Self {
            store: RwLock::new(CookieStore::default()),
            path: None,
        }
    }

    /// Load the cookie file at `path`. A missing file starts an empty jar
    /// that [`save`](Self::save) will create.
    pub fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let store = if path.is_file() {
            let file = File::open(&path).map_err(|e| cookie_error(&path, e.into()))?;
            cookie_store::serde::json::load(BufReader::new(file))
                .map_err(|e| cookie_error(&path, anyhow::anyhow!(e)))?
        } else {
            CookieStore::default()
        };

        tracing::debug!(path = %path.display(), "Loaded session cookies");
        Ok(Self {
            store: RwLock::new(store),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write persistent, unexpired cookies back to the file. No-op for an
    /// in-memory jar.
    pub fn save(&self) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| cookie_error(path, e.into()))?;
        }

        let store = self.store.read().map_err(|_| {
            cookie_error(path, anyhow::anyhow!("cookie store lock poisoned"))
        })?;
        let mut writer =
            BufWriter::new(File::create(path).map_err(|e| cookie_error(path, e.into()))?);
        cookie_store::serde::json::save(&store, &mut writer)
            .map_err(|e| cookie_error(path, anyhow::anyhow!(e)))?;
        writer.flush().map_err(|e| cookie_error(path, e.into()))?;

        tracing::debug!(path = %path.display(), "Saved session cookies");
        Ok(())
    }
}

impl reqwest::cookie::CookieStore for SessionCookies {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let cookies = cookie_headers.filter_map(|value| {
            value
                .to_str()
                .ok()
                .and_then(|raw| RawCookie::parse(raw.to_owned()).ok())
        });

        if let Ok(mut store) = self.store.write() {
            store.store_response_cookies(cookies, url);
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let store = self.store.read().ok()?;
        let header = store
            .get_request_values(url)
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");

        if header.is_empty() {
            return None;
        }
        HeaderValue::from_str(&header).ok()
    }
}

fn cookie_error(path: &Path, source: anyhow::Error) -> AppError {
    AppError::Configuration {
        key: format!("showroom.cookies ({})", path.display()),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore as _;
    use tempfile::TempDir;

    fn showroom_url() -> Url {
        Url::parse("https://www.showroom-live.com/").unwrap()
    }

    fn set(jar: &SessionCookies, header: &str) {
        let value = HeaderValue::from_str(header).unwrap();
        jar.set_cookies(&mut std::iter::once(&value), &showroom_url());
    }

    #[test]
    fn test_in_memory_jar() {
        let jar = SessionCookies::in_memory();
        assert!(jar.cookies(&showroom_url()).is_none());

        set(&jar, "sr_id=abc; Path=/");
        assert_eq!(jar.cookies(&showroom_url()).unwrap(), "sr_id=abc");
        assert!(jar.path().is_none());
        assert!(jar.save().is_ok());
    }

    #[test]
    fn test_cookies_survive_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cookies").join("alice.json");

        let jar = SessionCookies::load(&path).unwrap();
        set(&jar, "sr_id=abc; Path=/; Max-Age=3600");
        jar.save().unwrap();
        assert!(path.is_file());

        let reloaded = SessionCookies::load(&path).unwrap();
        assert_eq!(reloaded.cookies(&showroom_url()).unwrap(), "sr_id=abc");
    }

    #[test]
    fn test_session_cookies_are_not_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alice.json");

        let jar = SessionCookies::load(&path).unwrap();
        set(&jar, "transient=1; Path=/");
        jar.save().unwrap();

        let reloaded = SessionCookies::load(&path).unwrap();
        assert!(reloaded.cookies(&showroom_url()).is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alice.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SessionCookies::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }
}
