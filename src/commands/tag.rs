//! Tag command - Show or change the persisted log identifier

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils;
use ezlog::config::Settings;
use ezlog::Error;

/// Execute the tag command
pub fn execute(new_tag: Option<&str>, reset: bool, config: Option<&Path>) -> Result<()> {
    let path = utils::settings_path(config)?;

    if reset {
        let settings = Settings::default();
        settings.save(&path)?;
        println!("{} Identifier reset to {}", "Done:".green(), settings.tag);
        return Ok(());
    }

    let mut settings = Settings::load(&path)?;

    let Some(value) = new_tag else {
        println!("{}", settings.tag);
        return Ok(());
    };

    let tag = settings.set_tag(value).map_err(Error::from)?.clone();
    settings.save(&path)?;
    tracing::debug!(path = %path.display(), tag = %tag, "saved identifier");

    println!("{} Identifier set to {}", "Done:".green(), tag);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        execute(Some("🐞"), false, Some(&path)).unwrap();
        assert_eq!(Settings::load(&path).unwrap().tag.as_str(), "🐞");

        execute(None, true, Some(&path)).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_tag_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        assert!(execute(Some(""), false, Some(&path)).is_err());
        assert!(execute(Some(&"x".repeat(11)), false, Some(&path)).is_err());
        assert!(!path.exists());
    }
}
