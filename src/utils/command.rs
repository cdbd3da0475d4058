//! Command execution utilities

use crate::error::{EgInfoError, Result};
use std::process::Command;

/// Execute a command and return stdout as String, trimmed
pub fn run_command(program: &'static str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|err| EgInfoError::Command {
            program,
            detail: err.to_string(),
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(EgInfoError::Command {
            program,
            detail: format!("exit code: {:?}", output.status.code()),
        })
    }
}
