//! Rendering of the gathered record into the label text

use crate::data::InfoRecord;

/// Render the report shown in the window label.
///
/// Fields appear in a fixed order with two blank-line separators:
/// session block, installation block, distro block. A field whose value
/// is empty is skipped entirely; the separators are emitted regardless,
/// so the layout is reproducible for any record.
pub fn render_report(info: &InfoRecord) -> String {
    let mut text = String::new();

    push_line(&mut text, "Desktop", &info.desktop);
    push_line(&mut text, "Host", &info.host);
    push_line(&mut text, "User", &info.user);
    push_line(&mut text, "Language", &info.lang);
    push_line(&mut text, "Home", &info.home);
    text.push('\n');
    push_line(&mut text, "Installed", &info.installed.to_string());
    push_line(&mut text, "Program", &info.program);
    push_line(&mut text, "Script", &info.script);
    push_line(&mut text, "Folder", &info.folder);
    push_line(&mut text, "Icon", &info.icon);
    text.push('\n');
    push_line(&mut text, "Distro", &info.distro);
    push_line(&mut text, "Kernel", &info.kernel);

    text
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push('\n');
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> InfoRecord {
        InfoRecord {
            desktop: "GNOME".to_string(),
            host: String::new(),
            user: "alice".to_string(),
            lang: "en_US.UTF-8".to_string(),
            home: "/home/alice".to_string(),
            installed: true,
            program: "egInfo".to_string(),
            script: "egInfo.js".to_string(),
            folder: "/opt/egInfo".to_string(),
            icon: "application-x-executable".to_string(),
            distro: "Ubuntu 20.04.3 LTS".to_string(),
            kernel: "5.15.0-generic".to_string(),
        }
    }

    #[test]
    fn test_report_layout_end_to_end() {
        let text = render_report(&sample_record());
        assert_eq!(
            text,
            "\nDesktop: GNOME\
             \nUser: alice\
             \nLanguage: en_US.UTF-8\
             \nHome: /home/alice\
             \n\
             \nInstalled: true\
             \nProgram: egInfo\
             \nScript: egInfo.js\
             \nFolder: /opt/egInfo\
             \nIcon: application-x-executable\
             \n\
             \nDistro: Ubuntu 20.04.3 LTS\
             \nKernel: 5.15.0-generic"
        );
    }

    #[test]
    fn test_empty_field_produces_no_line() {
        let text = render_report(&sample_record());
        assert!(!text.contains("Host:"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let record = sample_record();
        assert_eq!(render_report(&record), render_report(&record));
    }

    #[test]
    fn test_separators_survive_an_empty_record() {
        // Only the always-rendered Installed line and the two separators
        let text = render_report(&InfoRecord::default());
        assert_eq!(text, "\n\nInstalled: false\n");
    }
}
