//! Shared utilities for commands

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ezlog::config::{self, Settings};
use ezlog::logline::synthesize::UNKNOWN_LABEL;
use ezlog::logline::{Document, Symbol, Tag};
use ezlog::Error;

/// Read a document, reporting a missing file as [`Error::NoDocument`]
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(Error::NoDocument(path.to_path_buf()).into());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    Ok(Document::new(text))
}

/// Load an outline, degrading to an empty one when it is absent or unreadable
pub fn load_outline(path: Option<&Path>) -> Vec<Symbol> {
    let Some(path) = path else {
        return Vec::new();
    };

    match ezlog::logline::symbol::read_outline(path) {
        Ok(outline) => outline,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load outline, continuing without symbols");
            Vec::new()
        }
    }
}

/// Resolve the settings file: explicit override or the platform default
pub fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => config::settings_path(),
    }
}

/// Resolve the tag for a command: `--tag` override, else the stored one
pub fn resolve_tag(override_tag: Option<&str>, settings_file: Option<&Path>) -> Result<Tag> {
    if let Some(value) = override_tag {
        return Ok(Tag::new(value).map_err(Error::from)?);
    }
    let settings = Settings::load(settings_path(settings_file)?)?;
    Ok(settings.tag)
}

/// Name of the workspace a file belongs to
///
/// Ascends from the file looking for a `.git` entry (directory or worktree
/// file) and uses that directory's name. Falls back to the file's parent
/// directory, then to [`UNKNOWN_LABEL`].
pub fn workspace_label(file: &Path) -> String {
    let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    let start = file.parent();

    let mut cur = start;
    while let Some(dir) = cur {
        if dir.join(".git").exists() {
            if let Some(name) = dir.file_name() {
                return name.to_string_lossy().into_owned();
            }
        }
        cur = dir.parent();
    }

    start
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Replace a file's contents atomically
///
/// Writes to a temp file in the same directory, carries over the original
/// permissions, then renames it over the destination.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let perms = fs::metadata(path).map(|m| m.permissions()).ok();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
    tmp.write_all(data.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Some(perms) = perms {
        fs::set_permissions(tmp.path(), perms).context("Failed to set temp file permissions")?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_missing() {
        let err = read_document(Path::new("/nonexistent/path/file.ts")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NoDocument(_))
        ));
    }

    #[test]
    fn test_load_outline_absent() {
        assert!(load_outline(None).is_empty());
    }

    #[test]
    fn test_load_outline_malformed_degrades() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outline.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_outline(Some(&path)).is_empty());
        assert!(load_outline(Some(&dir.path().join("missing.json"))).is_empty());
    }

    #[test]
    fn test_resolve_tag_override() {
        let tag = resolve_tag(Some("🐞"), None).unwrap();
        assert_eq!(tag.as_str(), "🐞");
        assert!(resolve_tag(Some(""), None).is_err());
    }

    #[test]
    fn test_resolve_tag_from_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"tag": "DBG"}"#).unwrap();
        assert_eq!(resolve_tag(None, Some(&path)).unwrap().as_str(), "DBG");
    }

    #[test]
    fn test_workspace_label_git_root() {
        let dir = TempDir::new().unwrap();
        let repo = dir.path().join("my-repo");
        let nested = repo.join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();
        let file = nested.join("a.ts");
        fs::write(&file, "").unwrap();

        assert_eq!(workspace_label(&file), "my-repo");
    }

    #[test]
    fn test_workspace_label_parent_fallback() {
        let label = workspace_label(Path::new("/nonexistent/project/file.ts"));
        assert_eq!(label, "project");
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.js");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
