//! `flaxbuild clean`: remove dependency build scratch folders.

use std::fs;

use anyhow::{Context, Result};
use flaxbuild_workspace::WorkspaceState;

/// Remove the intermediate folder holding dependency checkouts and builds.
pub fn run(state: &WorkspaceState) -> Result<()> {
    let deps_dir = state.deps_intermediate_folder();
    if deps_dir.exists() {
        fs::remove_dir_all(&deps_dir)
            .with_context(|| format!("removing {}", deps_dir.display()))?;
        println!("Removed {}", deps_dir.display());
    } else {
        println!("Already clean: {} does not exist", deps_dir.display());
    }
    Ok(())
}
