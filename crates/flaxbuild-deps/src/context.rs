//! Read-only context handed to every recipe.

use std::path::Path;

use flaxbuild_targets::TargetPlatform;
use flaxbuild_workspace::WorkspaceState;
use tracing::debug;

use crate::error::{DepsError, Result};
use crate::runner::{Invocation, ToolRunner, ToolsConfig};

/// Workspace state, tool configuration and the tool runner for one build.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    state: &'a WorkspaceState,
    tools: &'a ToolsConfig,
    runner: &'a dyn ToolRunner,
}

impl<'a> BuildContext<'a> {
    pub fn new(state: &'a WorkspaceState, tools: &'a ToolsConfig, runner: &'a dyn ToolRunner) -> Self {
        Self {
            state,
            tools,
            runner,
        }
    }

    pub fn state(&self) -> &'a WorkspaceState {
        self.state
    }

    pub fn tools(&self) -> &'a ToolsConfig {
        self.tools
    }

    pub fn host_platform(&self) -> Option<TargetPlatform> {
        self.state.host_platform()
    }

    /// Run a tool to completion, failing on a non-zero exit code.
    pub fn run<I, S>(&self, program: &str, args: I, working_dir: &Path) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_invocation(&Invocation::new(program, args, working_dir))
    }

    pub fn run_invocation(&self, invocation: &Invocation) -> Result<()> {
        debug!(cwd = %invocation.working_dir.display(), "{invocation}");
        let code = self.runner.run(invocation)?;
        if code != 0 {
            return Err(DepsError::ToolFailed {
                command: invocation.to_string(),
                code,
            });
        }
        Ok(())
    }
}
