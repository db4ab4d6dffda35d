//! Remove command - Delete every tagged log statement from a file

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils;
use ezlog::logline::remove::{is_log_line, remove_all};
use ezlog::logline::{Document, Tag};

/// Options for the remove command
#[derive(Debug, Default)]
pub struct RemoveOptions {
    /// Identifier override
    pub tag: Option<String>,
    /// Settings file override
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
}

/// Execute the remove command
pub fn execute(file: &str, options: &RemoveOptions) -> Result<()> {
    let path = Path::new(file);
    let document = utils::read_document(path)?;
    let tag = utils::resolve_tag(options.tag.as_deref(), options.config.as_deref())?;

    let removal = remove_all(document.text(), &tag);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&removal)?);
        return Ok(());
    }

    if !removal.changed {
        println!("No matching console.log statements found");
        return Ok(());
    }

    if options.dry_run {
        println!(
            "{} Would delete {} console.log statement(s) from {}:",
            "[DRY-RUN]".blue(),
            removal.removed,
            path.display()
        );
        for (line, text) in matching_lines(&document, &tag) {
            println!("  {:>5}: {}", line + 1, text.trim().dimmed());
        }
        return Ok(());
    }

    utils::write_atomic(path, &removal.text)
        .with_context(|| format!("Failed to update: {}", path.display()))?;

    println!(
        "{} Deleted {} console.log statement(s)",
        "Done:".green(),
        removal.removed
    );
    Ok(())
}

/// 0-based line numbers and text of every tagged log line
pub fn matching_lines<'a>(document: &'a Document, tag: &Tag) -> Vec<(usize, &'a str)> {
    document
        .text()
        .lines()
        .enumerate()
        .filter(|(_, line)| is_log_line(line, tag))
        .collect()
}
