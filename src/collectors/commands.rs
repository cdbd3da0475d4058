//! Distro and kernel probes via external commands

use crate::error::EgInfoError;
use crate::utils::command::run_command;
use crate::utils::parsing::parse_distro_description;

/// Fallback value when a probe command cannot be run
pub const UNKNOWN: &str = "Unknown";

/// Output of the two command probes.
#[derive(Debug, Clone, Default)]
pub struct CommandInfo {
    pub distro: String,
    pub kernel: String,
}

/// Run the two fixed probe commands (`lsb_release -d` and `uname -r`)
/// synchronously. The probes are independent: a failure in one never
/// stops the other. Failed probes leave the literal "Unknown" in the
/// record, and the underlying errors are returned so the caller can log
/// them or decide to abort.
pub fn collect_command_info() -> (CommandInfo, Vec<EgInfoError>) {
    let mut failures = Vec::new();

    let distro = match run_command("lsb_release", &["-d"]) {
        Ok(output) => parse_distro_description(&output),
        Err(err) => {
            failures.push(err);
            UNKNOWN.to_string()
        }
    };

    let kernel = match run_command("uname", &["-r"]) {
        Ok(output) => output,
        Err(err) => {
            failures.push(err);
            UNKNOWN.to_string()
        }
    };

    (CommandInfo { distro, kernel }, failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors collect_command_info with a swappable command pair, so the
    // failure path can be exercised without depending on what is
    // installed on the test host.
    fn probe_pair(
        distro_cmd: (&'static str, &[&str]),
        kernel_cmd: (&'static str, &[&str]),
    ) -> (CommandInfo, Vec<EgInfoError>) {
        let mut failures = Vec::new();
        let distro = match run_command(distro_cmd.0, distro_cmd.1) {
            Ok(output) => parse_distro_description(&output),
            Err(err) => {
                failures.push(err);
                UNKNOWN.to_string()
            }
        };
        let kernel = match run_command(kernel_cmd.0, kernel_cmd.1) {
            Ok(output) => output,
            Err(err) => {
                failures.push(err);
                UNKNOWN.to_string()
            }
        };
        (CommandInfo { distro, kernel }, failures)
    }

    #[test]
    fn test_failed_probe_yields_unknown_and_surfaces_the_error() {
        let (info, failures) = probe_pair(("false", &[]), ("false", &[]));
        assert_eq!(info.distro, UNKNOWN);
        assert_eq!(info.kernel, UNKNOWN);
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_probes_are_independent() {
        // First probe fails, second still runs
        let (info, failures) = probe_pair(("false", &[]), ("echo", &["5.15.0-generic"]));
        assert_eq!(info.distro, UNKNOWN);
        assert_eq!(info.kernel, "5.15.0-generic");
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_successful_distro_probe_is_parsed() {
        let (info, failures) = probe_pair(
            ("printf", &["Description:\\tUbuntu 20.04.3 LTS\\n"]),
            ("echo", &["5.15.0-generic"]),
        );
        assert_eq!(info.distro, "Ubuntu 20.04.3 LTS");
        assert!(failures.is_empty());
    }
}
