//! Pure formatting functions for terminal output.
//!
//! `format_*` functions build the styled line; `display_*` functions print
//! it. Styling comes from `console`, which drops colours when the stream is
//! not a terminal.

use console::style;

use crate::domain::Version;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format the version transition for a project.
///
/// A project with no previous release shows "Initial release" instead of
/// the zero version.
pub fn format_version_change(project: &str, previous: Version, next: Version) -> String {
    if previous == Version::ZERO {
        format!(
            "{} {}: {}",
            style("Initial release").bold(),
            project,
            style(next).green()
        )
    } else {
        format!(
            "{} {}: {} -> {}",
            style("Next release").bold(),
            project,
            style(previous).red(),
            style(next).green()
        )
    }
}

/// Format an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

pub fn display_version_change(project: &str, previous: Version, next: Version) {
    println!("{}", format_version_change(project, previous, next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_format_error() {
        assert_eq!(strip_ansi_codes(&format_error("boom")), "ERROR: boom");
    }

    #[test]
    fn test_format_success() {
        assert_eq!(strip_ansi_codes(&format_success("done")), "✓ done");
    }

    #[test]
    fn test_format_status() {
        assert_eq!(strip_ansi_codes(&format_status("working")), "→ working");
    }

    #[test]
    fn test_format_version_change() {
        let line = format_version_change("regex", Version::new(1, 3, 0), Version::new(1, 4, 0));
        assert_eq!(strip_ansi_codes(&line), "Next release regex: v1.3.0 -> v1.4.0");
    }

    #[test]
    fn test_format_initial_release() {
        let line = format_version_change("regex", Version::ZERO, Version::new(0, 0, 1));
        assert_eq!(strip_ansi_codes(&line), "Initial release regex: v0.0.1");
    }
}
