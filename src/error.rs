//! Centralized error handling for eginfo

use std::fmt;
use std::io;

/// Custom error type for eginfo operations
#[derive(Debug)]
pub enum EgInfoError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// The running executable's own path could not be resolved.
    /// Fatal: the icon lookup and installed-path check depend on it.
    Location(String),
    /// An external probe command failed to run or exited non-zero
    Command {
        program: &'static str,
        detail: String,
    },
    /// Parsing errors (invalid data format)
    Parse(String),
}

impl fmt::Display for EgInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EgInfoError::Io(err) => write!(f, "I/O error: {}", err),
            EgInfoError::Location(msg) => write!(f, "Location error: {}", msg),
            EgInfoError::Command { program, detail } => {
                write!(f, "Command '{}' failed: {}", program, detail)
            }
            EgInfoError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for EgInfoError {}

impl From<io::Error> for EgInfoError {
    fn from(error: io::Error) -> Self {
        EgInfoError::Io(error)
    }
}

/// Type alias for Results in eginfo
pub type Result<T> = std::result::Result<T, EgInfoError>;
