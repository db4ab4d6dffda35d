//! Error types shared by the library and the CLI

use std::path::PathBuf;

use crate::logline::tag::TagError;

/// Errors raised at the boundary between the caller and the core operations.
///
/// The core transformations themselves (locate, synthesize, remove) never
/// fail; these cover bad input and missing documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selection was empty or whitespace only
    #[error("Please select a variable or expression to log.")]
    EmptySelection,

    /// The selection spans more than one line
    #[error("Selection spans multiple lines; select a single-line expression to log.")]
    MultiLineSelection,

    #[error("Invalid identifier: {0}")]
    InvalidTag(#[from] TagError),

    /// No document to operate on
    #[error("No such document: {}", .0.display())]
    NoDocument(PathBuf),

    /// A position or selection argument could not be parsed or lies outside the document
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
