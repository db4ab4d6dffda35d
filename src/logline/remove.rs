//! Removal of tagged log statements
//!
//! Lines are matched on their structure rather than on a loose prefix: the
//! tag, four ` :: ` separated fields with a numeric line number, then the
//! expression label closed by `:"` and repeated as the live argument.
//! Anything else that merely mentions the tag is left alone.

use serde::Serialize;

use super::synthesize::FIELD_SEPARATOR;
use super::tag::Tag;

const CALL_PREFIX: &str = "console.log(";
const MESSAGE_END: &str = ":\",";

/// Fields recovered from a tagged log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLogLine<'a> {
    pub label: &'a str,
    pub file_label: &'a str,
    pub symbol: &'a str,
    pub line: usize,
    pub expression_label: &'a str,
    pub expression: &'a str,
}

/// Result of [`remove_all`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    pub text: String,
    pub changed: bool,
    /// Number of lines removed
    pub removed: usize,
}

/// Parse a single line (with or without its line break) as a tagged log statement.
pub fn parse_log_line<'a>(line: &'a str, tag: &Tag) -> Option<ParsedLogLine<'a>> {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    let rest = line.strip_prefix(CALL_PREFIX)?.trim_start();
    let rest = rest.strip_prefix('"')?.strip_prefix(tag.as_str())?.strip_prefix(' ')?;

    let rest = rest.trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    let rest = rest.strip_suffix(')')?;

    // The expression may itself contain `:",`, so try every split point.
    rest.match_indices(MESSAGE_END).find_map(|(idx, _)| {
        split_fields(&rest[..idx], rest[idx + MESSAGE_END.len()..].trim())
    })
}

/// Split the message into its five fields. The expression label must repeat
/// the live expression.
fn split_fields<'a>(message: &'a str, expression: &'a str) -> Option<ParsedLogLine<'a>> {
    let fields: Vec<&str> = message.splitn(5, FIELD_SEPARATOR).collect();
    let [label, file_label, symbol, line, expression_label] = <[&str; 5]>::try_from(fields).ok()?;

    if [label, file_label, symbol, expression].iter().any(|f| f.trim().is_empty()) {
        return None;
    }
    if expression_label.trim() != expression {
        return None;
    }
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let line = line.parse().ok()?;

    Some(ParsedLogLine {
        label,
        file_label,
        symbol,
        line,
        expression_label,
        expression,
    })
}

pub fn is_log_line(line: &str, tag: &Tag) -> bool {
    parse_log_line(line, tag).is_some()
}

/// Remove every tagged log line from `text` in a single pass.
///
/// Each matching line goes together with its line break. A matching last
/// line without a line break takes the preceding break instead, so that
/// removing a line appended at the end of a file restores the file exactly.
pub fn remove_all(text: &str, tag: &Tag) -> Removal {
    let mut result = String::with_capacity(text.len());
    let mut removed = 0;

    for line in text.split_inclusive('\n') {
        if !is_log_line(line, tag) {
            result.push_str(line);
            continue;
        }

        removed += 1;
        if !line.ends_with('\n') {
            strip_trailing_eol(&mut result);
        }
    }

    tracing::debug!(removed, tag = %tag, "removed tagged log lines");

    let changed = result != text;
    Removal {
        text: result,
        changed,
        removed,
    }
}

fn strip_trailing_eol(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}
