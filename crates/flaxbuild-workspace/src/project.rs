//! `.flaxproj` project descriptors.
//!
//! A project file is a JSON document describing a game or engine project:
//!
//! ```json
//! {
//!   "Name": "MyGame",
//!   "Version": "1.2",
//!   "Company": "Studio",
//!   "GameTarget": "GameTarget",
//!   "EditorTarget": "GameEditorTarget",
//!   "References": [ { "Name": "$(EnginePath)/Flax.flaxproj" } ]
//! }
//! ```
//!
//! References are loaded eagerly. A reference name may start with
//! `$(EnginePath)` or `$(ProjectPath)`; other relative names resolve against
//! the folder of the referencing project. A reference to a folder picks the
//! single project file inside it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkspaceError};

/// File extension of project descriptors.
pub const PROJECT_EXTENSION: &str = "flaxproj";

const ENGINE_PATH_MACRO: &str = "$(EnginePath)";
const PROJECT_PATH_MACRO: &str = "$(ProjectPath)";

/// A loaded project descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectInfo {
    /// Project name (required).
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    /// Name of the build target used for the game.
    #[serde(default)]
    pub game_target: Option<String>,
    /// Name of the build target used for the editor.
    #[serde(default)]
    pub editor_target: Option<String>,
    /// Other projects this one depends on.
    #[serde(default)]
    pub references: Vec<ProjectReference>,
    /// Path of the descriptor file this project was loaded from.
    #[serde(skip)]
    pub project_path: PathBuf,
    /// Folder containing the descriptor file.
    #[serde(skip)]
    pub project_folder_path: PathBuf,
}

/// A reference to another project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectReference {
    /// Path to the referenced project, possibly with a path macro.
    pub name: String,
    /// The referenced project, once loaded.
    #[serde(skip)]
    pub project: Option<Arc<ProjectInfo>>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl ProjectInfo {
    /// Load a project and all of its references.
    ///
    /// `path` may be a project file or a folder containing exactly one.
    pub fn load(path: &Path, engine_root: &Path) -> Result<Arc<ProjectInfo>> {
        ProjectLoader::new(engine_root).load(path)
    }

    /// Parse a descriptor without resolving references.
    pub fn parse(path: &Path, content: &str) -> Result<ProjectInfo> {
        let mut info: ProjectInfo =
            serde_json::from_str(content).map_err(|source| WorkspaceError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        info.project_path = path.to_path_buf();
        info.project_folder_path = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(info)
    }

    /// Find the project file in `dir`.
    ///
    /// Returns `None` when the folder holds no project file and an error when
    /// it holds more than one.
    pub fn find_in_dir(dir: &Path) -> Result<Option<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|source| WorkspaceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| WorkspaceError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == PROJECT_EXTENSION) {
                found.push(path);
            }
        }
        found.sort();
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            _ => Err(WorkspaceError::AmbiguousProject {
                dir: dir.to_path_buf(),
                candidates: found
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .collect(),
            }),
        }
    }

    /// This project followed by every project it references, transitively,
    /// each listed once.
    pub fn projects(&self) -> Vec<&ProjectInfo> {
        let mut out: Vec<&ProjectInfo> = Vec::new();
        collect_projects(self, &mut out);
        out
    }
}

fn collect_projects<'a>(project: &'a ProjectInfo, out: &mut Vec<&'a ProjectInfo>) {
    if out.iter().any(|p| p.project_path == project.project_path) {
        return;
    }
    out.push(project);
    for reference in &project.references {
        if let Some(referenced) = &reference.project {
            collect_projects(referenced, out);
        }
    }
}

/// Loads projects once per canonical path and detects reference cycles.
struct ProjectLoader<'a> {
    engine_root: &'a Path,
    loaded: HashMap<PathBuf, Arc<ProjectInfo>>,
    loading: Vec<PathBuf>,
}

impl<'a> ProjectLoader<'a> {
    fn new(engine_root: &'a Path) -> Self {
        Self {
            engine_root,
            loaded: HashMap::new(),
            loading: Vec::new(),
        }
    }

    fn load(&mut self, path: &Path) -> Result<Arc<ProjectInfo>> {
        let path = if path.is_dir() {
            ProjectInfo::find_in_dir(path)?.ok_or_else(|| WorkspaceError::ProjectNotFound {
                path: path.to_path_buf(),
            })?
        } else {
            path.to_path_buf()
        };
        if !path.is_file() {
            return Err(WorkspaceError::ProjectNotFound { path });
        }

        let key = fs::canonicalize(&path).map_err(|source| WorkspaceError::Io {
            path: path.clone(),
            source,
        })?;
        if let Some(project) = self.loaded.get(&key) {
            return Ok(project.clone());
        }
        if self.loading.contains(&key) {
            return Err(WorkspaceError::ReferenceCycle { path });
        }

        debug!(path = %path.display(), "loading project");
        let content = fs::read_to_string(&path).map_err(|source| WorkspaceError::Io {
            path: path.clone(),
            source,
        })?;
        let mut info = ProjectInfo::parse(&path, &content)?;

        self.loading.push(key.clone());
        for reference in &mut info.references {
            let reference_path = self.resolve_reference(&reference.name, &info.project_folder_path);
            reference.project = Some(self.load(&reference_path)?);
        }
        self.loading.pop();

        let info = Arc::new(info);
        self.loaded.insert(key, info.clone());
        Ok(info)
    }

    fn resolve_reference(&self, name: &str, project_folder: &Path) -> PathBuf {
        if let Some(rest) = name.strip_prefix(ENGINE_PATH_MACRO) {
            self.engine_root.join(rest.trim_start_matches(['/', '\\']))
        } else if let Some(rest) = name.strip_prefix(PROJECT_PATH_MACRO) {
            project_folder.join(rest.trim_start_matches(['/', '\\']))
        } else {
            let path = Path::new(name);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_folder.join(path)
            }
        }
    }
}
