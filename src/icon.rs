//! Window icon resolution with a named fallback

use std::path::{Path, PathBuf};

/// Icon asset looked up relative to the executable's folder
pub const ICON_ASSET: &str = "assets/app-icon.png";

/// Generic executable icon used when the asset is unavailable
pub const FALLBACK_ICON_NAME: &str = "application-x-executable";

/// The window icon: either a decodable image file next to the
/// executable, or a named icon from the system theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    File(PathBuf),
    Named(&'static str),
}

impl IconSource {
    /// String form recorded in the report
    pub fn descriptor(&self) -> String {
        match self {
            IconSource::File(path) => path.to_string_lossy().into_owned(),
            IconSource::Named(name) => (*name).to_string(),
        }
    }
}

/// Try the icon asset under `folder`; fall back to the named system icon
/// on any failure (missing file, unreadable, undecodable). The fallback
/// is silent, nothing propagates to the caller.
pub fn resolve(folder: &Path) -> IconSource {
    let candidate = folder.join(ICON_ASSET);
    match image::open(&candidate) {
        Ok(_) => IconSource::File(candidate),
        Err(err) => {
            log::debug!("icon asset {} unavailable: {}", candidate.display(), err);
            IconSource::Named(FALLBACK_ICON_NAME)
        }
    }
}
