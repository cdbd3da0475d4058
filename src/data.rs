//! The flat record of gathered system and environment fields

/// Everything the window displays, gathered once at startup.
///
/// String fields default to empty when the underlying source is
/// unavailable; failed command probes leave the literal "Unknown".
/// The record is built once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoRecord {
    pub desktop: String,
    pub host: String,
    pub user: String,
    pub lang: String,
    pub home: String,
    pub installed: bool,
    pub program: String,
    pub script: String,
    pub folder: String,
    pub icon: String,
    pub distro: String,
    pub kernel: String,
}
