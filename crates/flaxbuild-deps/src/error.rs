//! Dependency build error types.

use std::path::PathBuf;

use flaxbuild_targets::{TargetArchitecture, TargetPlatform};

/// Errors that can occur while building third-party dependencies.
#[derive(Debug, thiserror::Error)]
pub enum DepsError {
    /// An external tool could not be started.
    #[error("failed to start '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external tool exited with a non-zero code.
    #[error("command `{command}` failed with exit code {code}")]
    ToolFailed { command: String, code: i32 },

    /// Filesystem operation failure.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or directory expected to exist after a build step is missing.
    #[error("missing source: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Requested dependency name is not registered.
    #[error("unknown dependency '{name}' (available: {available})")]
    UnknownDependency { name: String, available: String },

    /// A dependency with the same name is already registered.
    #[error("dependency '{name}' is registered twice")]
    DuplicateDependency { name: String },

    /// No CMake setup exists for this platform/architecture pair.
    #[error("CMake is not supported for {platform} {architecture}: {detail}")]
    UnsupportedPlatform {
        platform: TargetPlatform,
        architecture: TargetArchitecture,
        detail: String,
    },

    /// A recipe failed; wraps the underlying error with the recipe name.
    #[error("failed to build dependency '{name}'")]
    Recipe {
        name: String,
        #[source]
        source: Box<DepsError>,
    },
}

impl DepsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DepsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for dependency operations.
pub type Result<T> = std::result::Result<T, DepsError>;
