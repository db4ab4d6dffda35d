//! Insert command - Add a tagged log statement for a selected expression

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils;
use ezlog::logline::{locate, synthesize, Document, LogEntry, Position, Range, Symbol, Tag};
use ezlog::Error;

/// What the user selected
#[derive(Debug, Clone)]
pub enum Target {
    /// A range in the document; its text is the expression
    Selection(Range),
    /// An explicit expression with the cursor on `line`
    Expression { line: usize, text: String },
}

/// Options for the insert command
#[derive(Debug, Default)]
pub struct InsertOptions {
    /// Outline JSON file (LSP DocumentSymbol array)
    pub outline: Option<PathBuf>,
    /// Workspace label (derived from the file location if omitted)
    pub label: Option<String>,
    /// Identifier override
    pub tag: Option<String>,
    /// Settings file override
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
}

/// Execute the insert command
pub fn execute(file: &str, target: &Target, options: &InsertOptions) -> Result<()> {
    let path = Path::new(file);
    let mut document = utils::read_document(path)?;
    let tag = utils::resolve_tag(options.tag.as_deref(), options.config.as_deref())?;
    let outline = utils::load_outline(options.outline.as_deref());
    let label = match &options.label {
        Some(label) => label.clone(),
        None => utils::workspace_label(path),
    };

    let file_path = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned();
    let (selected, entry) = plan(&document, target, &outline, &label, &file_path, &tag)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    if options.dry_run {
        println!(
            "{} Insert before line {} of {}:",
            "[DRY-RUN]".blue(),
            entry.insertion_line.saturating_add(1),
            path.display()
        );
        println!("  {}", entry.text);
        return Ok(());
    }

    document.insert_line(entry.insertion_line, &entry.text);
    utils::write_atomic(path, document.text())
        .with_context(|| format!("Failed to update: {}", path.display()))?;

    println!(
        "{} Inserted log for \"{}\" at line {}",
        "Done:".green(),
        selected,
        entry.insertion_line.saturating_add(1)
    );
    Ok(())
}

/// Resolve the selection and symbol, then synthesize the statement.
///
/// Returns the trimmed selected text alongside the entry.
pub fn plan(
    document: &Document,
    target: &Target,
    outline: &[Symbol],
    label: &str,
    file_path: &str,
    tag: &Tag,
) -> Result<(String, LogEntry)> {
    let (selected, cursor) = match target {
        Target::Selection(range) => {
            check_line(document, range.end.line)?;
            (document.text_in(*range).trim().to_string(), range.end)
        }
        Target::Expression { line, text } => {
            check_line(document, *line)?;
            (text.trim().to_string(), Position::new(*line, 0))
        }
    };

    if selected.is_empty() {
        return Err(Error::EmptySelection.into());
    }
    // The remover works line by line and could never match a split statement
    if selected.contains(['\n', '\r']) {
        return Err(Error::MultiLineSelection.into());
    }

    let symbol = locate(outline, cursor);
    tracing::debug!(
        cursor = %cursor,
        symbol = symbol.map(|s| s.name.as_str()),
        "resolved enclosing symbol"
    );

    let entry = synthesize(&selected, label, file_path, symbol, cursor.line, tag);
    Ok((selected, entry))
}

fn check_line(document: &Document, line: usize) -> Result<(), Error> {
    if line >= document.line_count() {
        return Err(Error::InvalidPosition(format!(
            "line {} is past the end of the document ({} lines)",
            line + 1,
            document.line_count()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREET: &str = "function greet() {\n  const name = \"Anmol\";\n  return name;\n}\n";

    fn greet_outline() -> Vec<Symbol> {
        vec![Symbol::new("greet", Range::lines(0, 3))]
    }

    #[test]
    fn test_plan_greet_scenario() {
        let document = Document::new(GREET);
        let target = Target::Selection(Range::new(Position::new(1, 8), Position::new(1, 12)));

        let (selected, entry) = plan(
            &document,
            &target,
            &greet_outline(),
            "Repo",
            "/a/b/file.ts",
            &Tag::default(),
        )
        .unwrap();

        assert_eq!(selected, "name");
        assert_eq!(entry.insertion_line, 4);
        assert_eq!(
            entry.text,
            r#"console.log("👾 Repo :: b/file.ts :: greet :: 2 :: name:", name);"#
        );

        let mut document = document;
        document.insert_line(entry.insertion_line, &entry.text);
        let lines: Vec<&str> = document.text().lines().collect();
        assert_eq!(lines[3], "}");
        assert_eq!(lines[4], entry.text);
    }

    #[test]
    fn test_plan_without_outline() {
        let document = Document::new(GREET);
        let target = Target::Expression {
            line: 2,
            text: "  name ".to_string(),
        };

        let (selected, entry) =
            plan(&document, &target, &[], "Repo", "file.ts", &Tag::default()).unwrap();
        assert_eq!(selected, "name");
        assert_eq!(entry.insertion_line, 3);
        assert!(entry.text.contains(":: unknown symbol :: 3 ::"));
    }

    #[test]
    fn test_plan_empty_selection() {
        let document = Document::new(GREET);
        let target = Target::Selection(Range::new(Position::new(1, 0), Position::new(1, 2)));

        let err = plan(&document, &target, &[], "Repo", "f.ts", &Tag::default()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::EmptySelection)));
    }

    #[test]
    fn test_plan_multi_line_selection() {
        let document = Document::new(GREET);
        let target = Target::Selection(Range::new(Position::new(1, 8), Position::new(2, 13)));

        let err = plan(&document, &target, &[], "Repo", "f.ts", &Tag::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MultiLineSelection)
        ));

        let target = Target::Expression {
            line: 1,
            text: "a +\r\nb".to_string(),
        };
        let err = plan(&document, &target, &[], "Repo", "f.ts", &Tag::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MultiLineSelection)
        ));
    }

    #[test]
    fn test_plan_line_out_of_range() {
        let document = Document::new(GREET);
        let target = Target::Expression {
            line: 40,
            text: "name".to_string(),
        };

        let err = plan(&document, &target, &[], "Repo", "f.ts", &Tag::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidPosition(_))
        ));
    }
}
