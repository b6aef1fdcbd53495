//! Colored terminal output.
//!
//! Progress and diagnostics go to stderr; command results (HTML, JSON, URLs)
//! go to stdout so they can be piped.

use std::path::Path;

use console::{Style, Term};
use ldocs_content::ScanFailure;

/// Terminal output formatter.
pub(crate) struct Output {
    stderr: Term,
    stdout: Term,
    green: Style,
    yellow: Style,
    red: Style,
    dim: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stderr: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            dim: Style::new().dim(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print a progress message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.stderr.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a pull request or section title (cyan bold).
    pub(crate) fn title(&self, msg: &str) {
        let _ = self
            .stderr
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Print a warning about one content file, path dimmed.
    pub(crate) fn file_warning(&self, path: &Path, msg: &str) {
        let _ = self.stderr.write_line(&format!(
            "{} {}",
            self.dim.apply_to(format!("{}:", path.display())),
            self.yellow.apply_to(msg)
        ));
    }

    /// Print the paths a content pass could not process.
    pub(crate) fn failures(&self, failures: &[ScanFailure]) {
        if failures.is_empty() {
            return;
        }
        let _ = self.stderr.write_line(
            &self
                .yellow
                .apply_to(format!("{} path(s) could not be processed:", failures.len()))
                .to_string(),
        );
        for failure in failures {
            let _ = self.stderr.write_line(&format!(
                "  - {} {}",
                self.dim.apply_to(failure.path.display()),
                failure.message
            ));
        }
    }

    /// Print a command result to stdout, uncolored.
    pub(crate) fn result(&self, msg: &str) -> std::io::Result<()> {
        self.stdout.write_line(msg)
    }
}
