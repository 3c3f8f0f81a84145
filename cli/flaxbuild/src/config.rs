//! `flaxbuild.toml` parsing and tool configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flaxbuild_deps::ToolsConfig;
use flaxbuild_targets::TargetPlatform;
use serde::Deserialize;

/// File name searched for from the current directory upward.
pub const CONFIG_FILE: &str = "flaxbuild.toml";

/// The top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Workspace layout.
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// External tool locations.
    #[serde(default)]
    pub tools: ToolsConfig,
    /// Dependency build defaults.
    #[serde(default)]
    pub deps: DepsConfig,
}

/// Workspace section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceConfig {
    /// Engine root; relative paths resolve against the config file's folder.
    #[serde(default)]
    pub engine_root: Option<PathBuf>,
}

/// Dependency build defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DepsConfig {
    /// Platforms to build when none are given on the command line.
    #[serde(default)]
    pub platforms: Vec<TargetPlatform>,
}

impl BuildConfig {
    /// Search upward from `start_dir` for a `flaxbuild.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config = Self::parse(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Engine root from the file, resolved against `config_dir`.
    pub fn engine_root(&self, config_dir: &Path) -> Option<PathBuf> {
        self.workspace
            .engine_root
            .as_ref()
            .map(|p| if p.is_absolute() { p.clone() } else { config_dir.join(p) })
    }
}
