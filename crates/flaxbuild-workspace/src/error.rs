//! Workspace error types.

use std::path::PathBuf;

/// Errors that can occur while loading the workspace.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// I/O error while reading a workspace file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed project descriptor.
    #[error("invalid project file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A project file or referenced project does not exist.
    #[error("project not found: {}", path.display())]
    ProjectNotFound { path: PathBuf },

    /// More than one project file in a folder.
    #[error("multiple project files in {}: {}", dir.display(), candidates.join(", "))]
    AmbiguousProject { dir: PathBuf, candidates: Vec<String> },

    /// A project references itself, directly or through other projects.
    #[error("project reference cycle through {}", path.display())]
    ReferenceCycle { path: PathBuf },
}

/// Result type alias for workspace operations.
pub type Result<T> = std::result::Result<T, WorkspaceError>;
