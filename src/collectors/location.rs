//! Resolution of the running executable's own location

use crate::error::{EgInfoError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory substring that marks an installed (as opposed to
/// development-tree) copy of the program.
const INSTALL_MARKER: &str = ".local/share/applications";

/// Where the running executable lives.
#[derive(Debug, Clone)]
pub struct AppLocation {
    /// Absolute path of the executable itself
    pub path: PathBuf,
    /// Parent directory of the executable
    pub folder: PathBuf,
    /// Leaf file name of the executable
    pub file: String,
}

/// Resolve the running executable's full path, parent folder and file
/// name. This is fatal when it fails: the icon lookup and the installed
/// check both key off the folder.
pub fn resolve() -> Result<AppLocation> {
    let path = env::current_exe()
        .map_err(|err| EgInfoError::Location(format!("current_exe: {}", err)))?;

    let folder = path
        .parent()
        .ok_or_else(|| EgInfoError::Location("executable path has no parent".to_string()))?
        .to_path_buf();

    let file = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| EgInfoError::Location("executable path has no file name".to_string()))?
        .to_string();

    Ok(AppLocation { path, folder, file })
}

/// Whether a folder path points into the conventional user-local
/// application-shortcuts directory.
pub fn is_installed(folder: &Path) -> bool {
    folder.to_string_lossy().contains(INSTALL_MARKER)
}
