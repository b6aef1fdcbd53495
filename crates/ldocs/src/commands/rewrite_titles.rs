//! `ldocs rewrite-titles` command implementation.

use std::path::PathBuf;

use clap::Args;
use ldocs_content::{RewriteReport, TitleRewriter};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the rewrite-titles command.
#[derive(Args)]
pub(crate) struct RewriteTitlesArgs {
    /// Path to configuration file (default: auto-discover ldocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Exit with an error if any file or directory could not be processed.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RewriteTitlesArgs {
    /// Execute the rewrite-titles command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, or if `--strict` is set and
    /// any path failed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let scanner = super::load_scanner(self.config.as_deref(), self.source_dir)?;
        output.info(&format!(
            "Rewriting titles in {}...",
            scanner.root().display()
        ));

        let report = TitleRewriter::new(scanner).run();
        print_report(&output, &report);

        if self.strict && !report.is_success() {
            return Err(CliError::Validation(format!(
                "{} path(s) could not be processed",
                report.failures.len()
            )));
        }
        Ok(())
    }
}

fn print_report(output: &Output, report: &RewriteReport) {
    output.success(&format!(
        "Scanned {} file(s): {} rewritten, {} unchanged",
        report.scanned,
        report.rewritten.len(),
        report.unchanged
    ));
    output.failures(&report.failures);
}
