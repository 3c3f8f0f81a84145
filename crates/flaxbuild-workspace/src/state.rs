//! The workspace state shared by every build step.
//!
//! Built once at startup and then only borrowed. There are no setters: the
//! `with_*` builders consume the value, so once a `&WorkspaceState` has been
//! handed out it cannot change.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use flaxbuild_targets::{TargetArchitecture, TargetConfiguration, TargetPlatform};
use tracing::info;

use crate::error::Result;
use crate::project::ProjectInfo;

/// Paths and project data for the current run.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    root: PathBuf,
    engine_root: PathBuf,
    project: Option<Arc<ProjectInfo>>,
    host: Option<TargetPlatform>,
}

impl WorkspaceState {
    /// Create a state without a loaded project. The host platform is
    /// detected from the running binary.
    ///
    /// Relative roots are made absolute against the current directory, since
    /// external tools resolve paths from their own working directories.
    pub fn new(root: impl Into<PathBuf>, engine_root: impl Into<PathBuf>) -> Self {
        Self {
            root: make_absolute(root.into()),
            engine_root: make_absolute(engine_root.into()),
            project: None,
            host: TargetPlatform::host(),
        }
    }

    /// Create a state and load the project file found in `root`, if any.
    pub fn load(root: impl Into<PathBuf>, engine_root: impl Into<PathBuf>) -> Result<Self> {
        let state = Self::new(root, engine_root);
        let project = match ProjectInfo::find_in_dir(&state.root)? {
            Some(path) => {
                let project = ProjectInfo::load(&path, &state.engine_root)?;
                info!(project = %project.name, version = %project.version, "loaded project");
                Some(project)
            }
            None => None,
        };
        Ok(Self { project, ..state })
    }

    /// Replace the project descriptor.
    pub fn with_project(self, project: Arc<ProjectInfo>) -> Self {
        Self {
            project: Some(project),
            ..self
        }
    }

    /// Override the detected host platform.
    pub fn with_host(self, host: Option<TargetPlatform>) -> Self {
        Self { host, ..self }
    }

    /// Root directory of the current workspace (game or engine project).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root directory of the engine installation.
    pub fn engine_root(&self) -> &Path {
        &self.engine_root
    }

    /// The project loaded from the workspace directory.
    pub fn project(&self) -> Option<&ProjectInfo> {
        self.project.as_deref()
    }

    /// The platform the tool runs on, when it is a recognized target.
    pub fn host_platform(&self) -> Option<TargetPlatform> {
        self.host
    }

    pub fn all_platforms(&self) -> &'static [TargetPlatform] {
        &TargetPlatform::ALL
    }

    pub fn all_architectures(&self) -> &'static [TargetArchitecture] {
        &TargetArchitecture::ALL
    }

    pub fn all_configurations(&self) -> &'static [TargetConfiguration] {
        &TargetConfiguration::ALL
    }

    /// `<engine>/Source/ThirdParty`: shared headers of prebuilt dependencies.
    pub fn third_party_folder(&self) -> PathBuf {
        self.engine_root.join("Source").join("ThirdParty")
    }

    /// `<engine>/Source/Platforms`: per-platform binaries.
    pub fn platforms_folder(&self) -> PathBuf {
        self.engine_root.join("Source").join("Platforms")
    }

    /// `<root>/Cache/Intermediate/Deps`: scratch space for dependency builds.
    pub fn deps_intermediate_folder(&self) -> PathBuf {
        self.root.join("Cache").join("Intermediate").join("Deps")
    }
}

fn make_absolute(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}
