//! Locate command - Show the innermost symbol at a position

use anyhow::{Context, Result};
use std::path::Path;

use ezlog::logline::symbol::read_outline;
use ezlog::logline::{locate, Position, UNKNOWN_SYMBOL};

/// Execute the locate command
pub fn execute(outline: &Path, position: Position) -> Result<()> {
    let outline = read_outline(outline)
        .with_context(|| format!("Failed to load outline: {}", outline.display()))?;

    let name = describe(locate(&outline, position).map(|s| s.name.as_str()));
    println!("{}", name);
    Ok(())
}

fn describe(name: Option<&str>) -> &str {
    name.unwrap_or(UNKNOWN_SYMBOL)
}
