//! Log statement synthesis
//!
//! Produces lines of the form
//!
//! ```text
//! console.log("<tag> <label> :: <dir/file> :: <symbol> :: <line> :: <expr>:", <expr>);
//! ```
//!
//! which [`super::remove`] recognizes field by field.

use serde::Serialize;

use super::symbol::{Symbol, UNKNOWN_SYMBOL};
use super::tag::Tag;

/// Separator between the fields of the message string
pub const FIELD_SEPARATOR: &str = " :: ";

/// Label used when no workspace name is available
pub const UNKNOWN_LABEL: &str = "UnknownRepo";

/// File label used when the path has no segments
pub const UNKNOWN_FILE: &str = "unknown file";

/// A synthesized log statement and where it goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// The statement, without a line break
    pub text: String,
    /// 0-based line the statement is inserted before
    pub insertion_line: usize,
}

/// Short file label: the last two path segments joined by `/`
///
/// # Example
/// ```
/// use ezlog::logline::synthesize::file_label;
///
/// assert_eq!(file_label("/a/b/file.ts"), "b/file.ts");
/// assert_eq!(file_label("file.ts"), "file.ts");
/// ```
pub fn file_label(path: &str) -> String {
    let mut segments = path.rsplit(['/', '\\']).filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(file), Some(dir)) => format!("{}/{}", dir, file),
        (Some(file), None) => file.to_string(),
        _ => String::new(),
    }
}

/// Make a value safe to embed as a single message field.
///
/// Line breaks become spaces, surrounding whitespace is trimmed, and a `::`
/// next to a space is closed up so the value never contains the field
/// separator. Blank values are replaced by `fallback`.
fn field(value: &str, fallback: &str) -> String {
    let mut value = value.replace(['\r', '\n'], " ").trim().to_string();
    while value.contains(" ::") || value.contains(":: ") {
        value = value.replace(" ::", "::").replace(":: ", "::");
    }

    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Build the log statement for `selected` and compute its insertion line.
///
/// `selected` must be non-empty and on one line; callers reject other
/// selections first. Label, file and symbol name are normalized so that the
/// result always parses back into the same five fields. The statement goes
/// one line past the end of `symbol` when one is known, so it observes the
/// fully initialized value, otherwise one line past the cursor.
pub fn synthesize(
    selected: &str,
    label: &str,
    file_path: &str,
    symbol: Option<&Symbol>,
    cursor_line: usize,
    tag: &Tag,
) -> LogEntry {
    let symbol_name = field(symbol.map_or("", |s| s.name.as_str()), UNKNOWN_SYMBOL);
    let message = [
        format!("{} {}", tag, field(label, UNKNOWN_LABEL)),
        field(&file_label(file_path), UNKNOWN_FILE),
        symbol_name.clone(),
        cursor_line.saturating_add(1).to_string(),
        selected.to_string(),
    ]
    .join(FIELD_SEPARATOR);

    let text = format!("console.log(\"{}:\", {});", message, selected);
    let insertion_line = symbol
        .map_or(cursor_line, |s| s.range.end.line)
        .saturating_add(1);

    tracing::debug!(symbol = %symbol_name, insertion_line, "synthesized log line");

    LogEntry {
        text,
        insertion_line,
    }
}
