//! Source checkout through git.

use std::path::Path;

use tracing::info;

use crate::context::BuildContext;
use crate::error::{DepsError, Result};

fn is_git_repo(path: &Path) -> bool {
    path.join(".git").exists()
}

fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| DepsError::io(path, e))
}

/// Shallow clone of the default branch into `path`.
///
/// Does nothing when `path` already holds a repository.
pub fn clone_git_repo_fast(ctx: &BuildContext<'_>, path: &Path, url: &str) -> Result<()> {
    if is_git_repo(path) {
        info!(path = %path.display(), "repository already cloned");
        return Ok(());
    }
    ensure_dir(path)?;
    info!(url, path = %path.display(), "cloning");
    // Runs inside the destination folder.
    ctx.run(&ctx.tools().git, ["clone", "--depth", "1", url, "."], path)
}

/// Full clone into `path`, optionally pinned to `commit`.
///
/// An existing repository is not cloned again but is still reset to `commit`.
pub fn clone_git_repo(
    ctx: &BuildContext<'_>,
    path: &Path,
    url: &str,
    commit: Option<&str>,
) -> Result<()> {
    if !is_git_repo(path) {
        ensure_dir(path)?;
        info!(url, path = %path.display(), "cloning");
        ctx.run(&ctx.tools().git, ["clone", url, "."], path)?;
    }
    if let Some(commit) = commit {
        ctx.run(&ctx.tools().git, ["reset", "--hard", commit], path)?;
    }
    Ok(())
}

/// Discard local modifications and untracked files in a clone.
pub fn git_reset_local_changes(ctx: &BuildContext<'_>, path: &Path) -> Result<()> {
    ctx.run(&ctx.tools().git, ["reset", "--hard"], path)?;
    ctx.run(&ctx.tools().git, ["clean", "-fdx"], path)
}
