//! Log identifier (tag)
//!
//! The tag is the short marker every generated statement starts with. It is
//! what the remover keys on, so it is validated once and then passed around
//! as a value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier used when none has been configured
pub const DEFAULT_TAG: &str = "👾";

/// Maximum identifier length, in characters
pub const MAX_TAG_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("Identifier cannot be empty")]
    Empty,

    #[error("Identifier cannot be longer than {max} characters (got {len})")]
    TooLong { len: usize, max: usize },

    #[error("Identifier cannot contain whitespace")]
    Whitespace,
}

/// A validated log identifier: non-empty, at most [`MAX_TAG_LEN`] characters
/// and free of whitespace, so the space after it always ends the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Validate and build a tag. Surrounding whitespace is dropped.
    pub fn new(value: &str) -> Result<Self, TagError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(TagError::Empty);
        }

        if value.chars().any(char::is_whitespace) {
            return Err(TagError::Whitespace);
        }

        let len = value.chars().count();
        if len > MAX_TAG_LEN {
            return Err(TagError::TooLong {
                len,
                max: MAX_TAG_LEN,
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self(DEFAULT_TAG.to_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tag() {
        assert_eq!(Tag::default().as_str(), "👾");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Tag::new(""), Err(TagError::Empty));
        assert_eq!(Tag::new("   "), Err(TagError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let err = Tag::new(&"x".repeat(11)).unwrap_err();
        assert_eq!(err, TagError::TooLong { len: 11, max: 10 });
    }

    #[test]
    fn test_boundary_length_accepted() {
        assert!(Tag::new(&"x".repeat(10)).is_ok());
    }

    #[test]
    fn test_emoji_accepted() {
        let tag = Tag::new("🐞").unwrap();
        assert_eq!(tag.to_string(), "🐞");
    }

    #[test]
    fn test_length_counts_characters() {
        // Ten emoji are forty bytes but still ten characters
        assert!(Tag::new(&"🐞".repeat(10)).is_ok());
    }

    #[test]
    fn test_inner_whitespace_rejected() {
        assert_eq!(Tag::new("DB G"), Err(TagError::Whitespace));
        assert_eq!(Tag::new("a\tb"), Err(TagError::Whitespace));
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(Tag::new("  DBG ").unwrap().as_str(), "DBG");
    }

    #[test]
    fn test_deserialize_validates() {
        let tag: Tag = serde_json::from_str("\"🐞\"").unwrap();
        assert_eq!(tag.as_str(), "🐞");
        assert!(serde_json::from_str::<Tag>("\"\"").is_err());
    }
}
