//! `ldocs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use ldocs_content::check_markers;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover ldocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any issue was found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let scanner = super::load_scanner(self.config.as_deref(), self.source_dir)?;
        let report = check_markers(&scanner);

        for issue in &report.issues {
            output.file_warning(&issue.path, &issue.message);
        }
        output.failures(&report.failures);

        if report.is_clean() {
            output.success(&format!("Checked {} file(s), no issues found", report.files));
            return Ok(());
        }

        Err(CliError::Validation(format!(
            "{} marker issue(s) and {} failure(s) in {} file(s)",
            report.issues.len(),
            report.failures.len(),
            report.files
        )))
    }
}
