//! Symbol outline and innermost-symbol lookup
//!
//! Outlines use the shape of LSP `DocumentSymbol` so that the output of
//! `textDocument/documentSymbol` can be saved and passed in as-is.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::document::{Position, Range};
use crate::error::Result;

/// Label used when no enclosing symbol is found
pub const UNKNOWN_SYMBOL: &str = "unknown symbol";

/// A named source range with nested children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub range: Range,
    #[serde(default)]
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, range: Range) -> Self {
        Self {
            name: name.into(),
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Symbol>) -> Self {
        self.children = children;
        self
    }
}

/// Find the innermost symbol whose range contains `position`.
///
/// Siblings are searched in outline order and the first one containing the
/// position is descended into. Returns `None` for an empty outline or when no
/// top-level symbol contains the position.
pub fn locate(outline: &[Symbol], position: Position) -> Option<&Symbol> {
    let symbol = outline.iter().find(|s| s.range.contains(position))?;
    Some(locate(&symbol.children, position).unwrap_or(symbol))
}

/// Read an outline from a JSON file holding an array of symbols
pub fn read_outline<P: AsRef<Path>>(path: P) -> Result<Vec<Symbol>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_outline(&content)
}

/// Parse an outline from JSON. `null` is treated as an empty outline.
pub fn parse_outline(json: &str) -> Result<Vec<Symbol>> {
    let outline: Option<Vec<Symbol>> = serde_json::from_str(json)?;
    Ok(outline.unwrap_or_default())
}
