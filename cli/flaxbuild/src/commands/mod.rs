//! CLI command implementations.

pub mod clean;
pub mod deps;
pub mod info;
pub mod list;
