//! ezlog library
//!
//! Inserts annotated `console.log` statements next to a selected expression
//! and removes them again in bulk. The editor (or the `ezlog` CLI) supplies
//! the document, the selection and an optional symbol outline; this crate
//! computes the edits.

pub mod config;
pub mod error;
pub mod logline;

pub use error::{Error, Result};
