//! Version control setup for the generated project.

use crate::constants::DEFAULT_GITIGNORE;
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Initializes a git repository in `dir`, creating the directory if needed,
/// and adds the default `.gitignore` unless the project already has one.
pub fn init_repository<P: AsRef<Path>>(dir: P) -> Result<git2::Repository> {
    let dir = dir.as_ref();
    debug!("Initializing git repository in '{}'.", dir.display());
    let repo = git2::Repository::init(dir).map_err(Error::Git2Error)?;
    write_default_gitignore(dir)?;
    Ok(repo)
}

/// Writes [`DEFAULT_GITIGNORE`] to `dir/.gitignore` if the file is missing.
///
/// # Returns
/// * `Result<bool>` - Whether the file was written
pub fn write_default_gitignore<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let path = dir.as_ref().join(".gitignore");
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, DEFAULT_GITIGNORE).map_err(Error::IoError)?;
    info!("Created {}", path.display());
    Ok(true)
}

/// Removes the `.git` directory of `dir`, if any.
///
/// # Returns
/// * `Result<bool>` - Whether a directory was removed
pub fn remove_git_dir<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let git_dir = dir.as_ref().join(".git");
    if !git_dir.is_dir() {
        return Ok(false);
    }
    debug!("Removing '{}'.", git_dir.display());
    fs::remove_dir_all(&git_dir).map_err(Error::IoError)?;
    Ok(true)
}
