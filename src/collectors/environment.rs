//! Environment and session information collection

use std::env;
use std::path::Path;

use crate::utils::file::read_first_line;

/// Process/environment state shown in the report.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentInfo {
    pub desktop: String,
    pub host: String,
    pub user: String,
    pub lang: String,
    pub home: String,
}

/// Collect session and environment information. Never fails; an absent
/// source simply yields an empty string, so a partially populated report
/// still renders.
pub fn collect_environment_info() -> EnvironmentInfo {
    EnvironmentInfo {
        desktop: env_or_empty("XDG_CURRENT_DESKTOP"),
        host: read_first_line("/proc/sys/kernel/hostname").unwrap_or_default(),
        user: env_or_empty("USER"),
        lang: env_or_empty("LANG"),
        home: dirs::home_dir()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Process-level program name: the basename of argv[0].
pub fn program_name() -> String {
    env::args_os()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}
