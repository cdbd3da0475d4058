//! String parsing utilities

/// Extract the value from an `lsb_release -d` description line.
///
/// The known output format is `Description:\tUbuntu 20.04.3 LTS`; only
/// the first line of the output is considered. When the colon-tab
/// delimiter is missing the raw trimmed line is returned instead of
/// failing.
pub fn parse_distro_description(output: &str) -> String {
    let first_line = output.lines().next().unwrap_or("");
    match first_line.split_once(":\t") {
        Some((_, value)) => value.trim().to_string(),
        None => first_line.trim().to_string(),
    }
}
