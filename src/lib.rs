//! eginfo library
//!
//! A small GTK window that shows system and environment information.

pub mod app;
pub mod collectors;
pub mod data;
pub mod display;
pub mod error;
pub mod icon;
pub mod utils;

pub use data::InfoRecord;
pub use error::{EgInfoError, Result};

use collectors::location::{self, AppLocation};

/// Gather everything the window displays.
///
/// Environment lookups cannot fail; command-probe failures degrade the
/// affected field to "Unknown" and are returned alongside the record so
/// the caller can log them. The record itself is always complete.
pub fn collect_info(location: &AppLocation, icon: String) -> (InfoRecord, Vec<EgInfoError>) {
    let env = collectors::environment::collect_environment_info();
    let (commands, failures) = collectors::commands::collect_command_info();

    let record = InfoRecord {
        desktop: env.desktop,
        host: env.host,
        user: env.user,
        lang: env.lang,
        home: env.home,
        installed: location::is_installed(&location.folder),
        program: collectors::environment::program_name(),
        script: location.file.clone(),
        folder: location.folder.to_string_lossy().into_owned(),
        icon,
        distro: commands.distro,
        kernel: commands.kernel,
    };

    (record, failures)
}
