//! Workspace state for the flaxbuild tool.
//!
//! Holds the workspace root, the engine root and the loaded project
//! descriptor. Constructed once by the command-line front end and then
//! passed by reference to every build step.

pub mod error;
pub mod project;
pub mod state;

pub use error::{Result, WorkspaceError};
pub use project::{ProjectInfo, ProjectReference, PROJECT_EXTENSION};
pub use state::WorkspaceState;
