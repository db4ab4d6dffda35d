//! Platform-specific configuration and persisted settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logline::tag::{Tag, TagError};

const SETTINGS_FILE: &str = "settings.json";

/// Get the ezlog configuration directory
/// - macOS: ~/Library/Application Support/ezlog/
/// - Linux: ~/.config/ezlog/
/// - Windows: %APPDATA%/ezlog/
pub fn config_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("ezlog"))
}

/// Get the default settings file path
pub fn settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE))
}

/// The settings.json file structure
///
/// Only the log identifier is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tag: Tag,
}

impl Settings {
    /// Read settings from a file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Write settings to a file, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }

    /// Validate and replace the log identifier
    pub fn set_tag(&mut self, value: &str) -> Result<&Tag, TagError> {
        self.tag = Tag::new(value)?;
        Ok(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_exist() {
        // These should not panic
        let _ = config_dir();
        let _ = settings_path();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tag.as_str(), "👾");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.set_tag("🐞").unwrap();
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.tag.as_str(), "🐞");
    }

    #[test]
    fn test_set_tag_validates() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_tag(""), Err(TagError::Empty));
        assert!(settings.set_tag(&"x".repeat(11)).is_err());
        // A failed update keeps the previous tag
        assert_eq!(settings.tag, Tag::default());
    }

    #[test]
    fn test_invalid_stored_tag_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"tag": "this is far too long"}"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_empty_object_uses_default_tag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        assert_eq!(Settings::load(&path).unwrap().tag, Tag::default());
    }
}
