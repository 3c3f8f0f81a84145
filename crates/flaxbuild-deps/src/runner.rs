//! External tool invocation.
//!
//! Every child process a recipe starts goes through [`ToolRunner`], so the
//! same recipe code can run real tools or drive a test double.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::error::{DepsError, Result};

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path.
    pub program: String,
    /// Arguments, passed as-is (no shell).
    pub args: Vec<String>,
    /// Working directory of the child.
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, working_dir: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs external tools and reports their exit code.
///
/// A non-zero code is not an error at this level; the caller decides.
/// `Err` means the tool could not be run at all.
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Spawns real child processes with inherited stdio, blocking until exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .status()
            .map_err(|source| DepsError::ToolSpawn {
                program: invocation.program.clone(),
                source,
            })?;
        // Killed by a signal.
        Ok(status.code().unwrap_or(-1))
    }
}

/// Names or paths of the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToolsConfig {
    pub git: String,
    pub python: String,
    pub cmake: String,
    pub msbuild: String,
    /// Visual Studio generator name passed to CMake for Windows-family targets.
    pub vs_generator: String,
    /// Android NDK root. Falls back to `ANDROID_NDK` / `ANDROID_NDK_HOME`.
    pub android_ndk: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: "git".into(),
            python: "python".into(),
            cmake: "cmake".into(),
            msbuild: "msbuild".into(),
            vs_generator: "Visual Studio 16 2019".into(),
            android_ndk: None,
        }
    }
}

impl ToolsConfig {
    /// Resolve the Android NDK location from the config or the environment.
    pub fn android_ndk(&self) -> Option<PathBuf> {
        self.android_ndk.clone().or_else(|| {
            ["ANDROID_NDK", "ANDROID_NDK_HOME"]
                .iter()
                .find_map(|key| std::env::var_os(key))
                .map(PathBuf::from)
        })
    }
}

/// Records invocations and reports success without running anything.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingToolRunner {
    invocations: std::cell::RefCell<Vec<Invocation>>,
}

#[cfg(test)]
impl RecordingToolRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Everything run so far, in order.
    pub(crate) fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

#[cfg(test)]
impl ToolRunner for RecordingToolRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        self.invocations.borrow_mut().push(invocation.clone());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let inv = Invocation::new(
            "cmake",
            ["-G", "Visual Studio 16 2019", "-A", "x64"],
            Path::new("/tmp"),
        );
        assert_eq!(inv.to_string(), "cmake -G \"Visual Studio 16 2019\" -A x64");
    }

    #[test]
    fn recording_runner_keeps_order() {
        let runner = RecordingToolRunner::new();
        runner.run(&Invocation::new("git", ["status"], Path::new("."))).unwrap();
        runner
            .run(&Invocation::new("cmake", ["--version"], Path::new("build")))
            .unwrap();
        let seen = runner.invocations();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].program, "git");
        assert_eq!(seen[1].working_dir, Path::new("build"));
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let inv = Invocation::new("flaxbuild-no-such-tool", Vec::<String>::new(), dir.path());
        let err = SystemToolRunner.run(&inv).unwrap_err();
        assert!(matches!(err, DepsError::ToolSpawn { .. }));
    }

    #[test]
    fn tools_config_defaults_and_overrides() {
        let config: ToolsConfig = toml::from_str("python = \"python3\"\n").unwrap();
        assert_eq!(config.python, "python3");
        assert_eq!(config.git, "git");
        assert_eq!(config.vs_generator, "Visual Studio 16 2019");

        let config: ToolsConfig = toml::from_str("android-ndk = \"/opt/ndk\"\n").unwrap();
        assert_eq!(config.android_ndk(), Some(PathBuf::from("/opt/ndk")));
    }
}
