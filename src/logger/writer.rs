//! Log file opening for the logger

use crate::logger::config::FileConfig;
use anyhow::Context;
use jiff::Zoned;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

const TIMESTAMP_PLACEHOLDER: &str = "{timestamp}";

/// Resolve the configured path, expanding `{timestamp}` against `now`.
pub(crate) fn resolve_log_path(config: &FileConfig, now: &Zoned) -> PathBuf {
    let raw = config.path.to_string_lossy();
    if raw.contains(TIMESTAMP_PLACEHOLDER) {
        let stamp = now.strftime("%Y%m%d_%H%M%S").to_string();
        PathBuf::from(raw.replace(TIMESTAMP_PLACEHOLDER, &stamp))
    } else {
        config.path.clone()
    }
}

/// Open the log file, creating its directory when missing.
///
/// The file is wrapped in a `Mutex` so it can be handed straight to
/// `fmt::layer().with_writer(..)`.
pub(crate) fn open_log_file(config: &FileConfig) -> anyhow::Result<Mutex<File>> {
    let path = resolve_log_path(config, &Zoned::now());

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(Mutex::new(file))
}
