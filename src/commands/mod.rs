//! CLI commands

pub mod insert;
pub mod locate;
pub mod remove;
pub mod tag;
pub mod utils;
