//! Filesystem primitives used when staging build outputs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DepsError, Result};

/// Create `path` if needed; with `force_empty`, remove its contents first.
pub fn setup_directory(path: &Path, force_empty: bool) -> Result<()> {
    if force_empty {
        directory_delete(path)?;
    }
    fs::create_dir_all(path).map_err(|e| DepsError::io(path, e))
}

/// Copy one file, overwriting the destination and creating its parent.
pub fn file_copy(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(DepsError::MissingSource {
            path: src.to_path_buf(),
        });
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| DepsError::io(parent, e))?;
    }
    debug!(src = %src.display(), dst = %dst.display(), "copy file");
    fs::copy(src, dst).map_err(|e| DepsError::io(dst, e))?;
    Ok(())
}

/// Delete a file if it exists. Returns whether something was deleted.
pub fn file_delete(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(DepsError::io(path, e)),
    }
}

/// Recursively copy a directory tree into `dst`.
pub fn directory_copy(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_dir() {
        return Err(DepsError::MissingSource {
            path: src.to_path_buf(),
        });
    }
    fs::create_dir_all(dst).map_err(|e| DepsError::io(dst, e))?;
    for entry in fs::read_dir(src).map_err(|e| DepsError::io(src, e))? {
        let entry = entry.map_err(|e| DepsError::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            directory_copy(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| DepsError::io(&to, e))?;
        }
    }
    Ok(())
}

/// Remove a directory tree. Missing directories are fine.
pub fn directory_delete(path: &Path) -> Result<()> {
    if path.exists() {
        debug!(path = %path.display(), "delete directory");
        fs::remove_dir_all(path).map_err(|e| DepsError::io(path, e))?;
    }
    Ok(())
}

/// Files directly inside `dir` with the given extension, sorted.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| DepsError::io(dir, e))? {
        let path = entry.map_err(|e| DepsError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
