//! Core log-line operations
//!
//! Everything in here is a pure text transformation: the caller supplies the
//! document text, the selection and an optional outline, and applies the
//! resulting edit itself.

pub mod document;
pub mod remove;
pub mod symbol;
pub mod synthesize;
pub mod tag;

// Re-exports for library consumers
pub use document::{Document, Position, Range};
pub use remove::{remove_all, Removal};
pub use symbol::{locate, Symbol, UNKNOWN_SYMBOL};
pub use synthesize::{synthesize, LogEntry};
pub use tag::{Tag, TagError};
