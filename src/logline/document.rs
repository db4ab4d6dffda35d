//! In-memory document model
//!
//! Positions are 0-based `(line, column)` pairs where columns count
//! characters. A document with `n` line breaks has `n + 1` lines, the last
//! one possibly empty, which is how editors count them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 0-based line/column position
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    #[serde(rename = "character")]
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Parses the 1-based `LINE:COL` (or bare `LINE`) form used on the command line.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition(format!("expected LINE[:COL], got '{}'", s));
        let (line, column) = match s.trim().split_once(':') {
            Some((line, column)) => (line, Some(column)),
            None => (s.trim(), None),
        };

        let line: usize = line.parse().map_err(|_| invalid())?;
        let column: usize = match column {
            Some(c) => c.parse().map_err(|_| invalid())?,
            None => 1,
        };
        if line == 0 || column == 0 {
            return Err(Error::InvalidPosition(format!(
                "positions are 1-based, got '{}'",
                s
            )));
        }

        Ok(Self::new(line - 1, column - 1))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

/// A span between two positions, inclusive at both ends for containment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range covering the whole of lines `start..=end`
    pub fn lines(start: usize, end: usize) -> Self {
        Self::new(Position::new(start, 0), Position::new(end, usize::MAX))
    }

    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Parses `START-END` where both ends use the [`Position`] syntax.
impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((start, end)) => Ok(Self::new(start.parse()?, end.parse()?)),
            None => {
                let at: Position = s.parse()?;
                Ok(Self::new(at, at))
            }
        }
    }
}

/// A text buffer with line/column addressing
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    eol: &'static str,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let eol = detect_eol(&text);
        Self { text, eol }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line break used by this document (`"\n"` when it has none)
    pub fn eol(&self) -> &'static str {
        self.eol
    }

    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    /// Text of a line without its line break
    pub fn line(&self, line: usize) -> Option<&str> {
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    /// Byte offset of the start of `line`, or `None` past the last line
    fn line_start(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return Some(0);
        }
        self.text
            .match_indices('\n')
            .nth(line - 1)
            .map(|(idx, _)| idx + 1)
    }

    /// Byte offset for a position. Lines and columns past the end are clamped.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(start) = self.line_start(position.line) else {
            return self.text.len();
        };
        let content = self.line(position.line).unwrap_or_default();

        content
            .char_indices()
            .nth(position.column)
            .map_or(start + content.len(), |(idx, _)| start + idx)
    }

    /// Position of a byte offset. Offsets past the end map to the end of the document.
    pub fn position_at(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &self.text[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before[line_start..].trim_end_matches('\r').chars().count();

        Position::new(line, column)
    }

    /// Text covered by a range
    pub fn text_in(&self, range: Range) -> &str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end);
        &self.text[start.min(end)..start.max(end)]
    }

    /// Insert `content` as a whole new line before `line`.
    ///
    /// Lines past the end of the document append, adding a line break first
    /// when the document does not end with one. In that case the inserted
    /// line is left unterminated so the original text is a prefix of the
    /// result.
    pub fn insert_line(&mut self, line: usize, content: &str) {
        match self.line_start(line) {
            Some(offset) if offset < self.text.len() || self.text.is_empty() => {
                let insertion = format!("{}{}", content, self.eol);
                self.text.insert_str(offset, &insertion);
            }
            _ if self.text.is_empty() || self.text.ends_with('\n') => {
                self.text.push_str(content);
                self.text.push_str(self.eol);
            }
            _ => {
                self.text.push_str(self.eol);
                self.text.push_str(content);
            }
        }
    }
}

fn detect_eol(text: &str) -> &'static str {
    match text.find('\n') {
        Some(idx) if idx > 0 && text.as_bytes()[idx - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}
