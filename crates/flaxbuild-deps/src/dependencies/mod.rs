//! Built-in dependency recipes.

pub mod glslang;

pub use glslang::Glslang;
