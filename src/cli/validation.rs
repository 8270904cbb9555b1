//! CLI argument validation functions
//!
//! Checks that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    validate_readable_file(path_str, "Configuration file")
}

/// Validate that a saved catalog snapshot is accessible
pub fn validate_snapshot_path(path_str: &str) -> Result<PathBuf, String> {
    validate_readable_file(path_str, "Snapshot file")
}

fn validate_readable_file(path_str: &str, what: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("{} does not exist: '{}'", what, path_str));
    }

    if !path.is_file() {
        return Err(format!("{} path is not a file: '{}'", what, path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read {} '{}': {}", what.to_lowercase(), path_str, e)),
    }
}

/// Validate a genre name given on the command line
pub fn validate_genre(genre_str: &str) -> Result<String, String> {
    let genre = genre_str.trim();
    if genre.is_empty() {
        return Err("Genre name cannot be empty".to_string());
    }
    Ok(genre.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_config_file_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "").unwrap();

        assert_eq!(
            validate_config_file_path(file.to_str().unwrap()).unwrap(),
            file
        );
    }

    #[test]
    fn test_validate_config_file_path_missing() {
        let err = validate_config_file_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_validate_config_file_path_directory() {
        let dir = TempDir::new().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("is not a file"));
    }

    #[test]
    fn test_validate_snapshot_path_missing() {
        let err = validate_snapshot_path("/definitely/not/here.json").unwrap_err();
        assert!(err.starts_with("Snapshot file"));
    }

    #[test]
    fn test_validate_genre() {
        assert_eq!(validate_genre("  アイドル ").unwrap(), "アイドル");
        assert!(validate_genre("   ").is_err());
    }
}
