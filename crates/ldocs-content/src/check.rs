//! Validation of heading marker usage across a content tree.

use std::path::PathBuf;

use ldocs_meta::Document;
use ldocs_renderer::{HtmlBackend, MarkdownRenderer};

use crate::scanner::{ScanFailure, Scanner};

/// A heading marker problem in one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerIssue {
    pub path: PathBuf,
    pub message: String,
}

/// Result of checking a content tree.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of Markdown files rendered.
    pub files: usize,
    pub issues: Vec<MarkerIssue>,
    pub failures: Vec<ScanFailure>,
}

impl CheckReport {
    /// Check if no issues and no failures were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.failures.is_empty()
    }
}

/// Render every Markdown file under the scanner root and collect the
/// renderer's marker warnings.
pub fn check_markers(scanner: &Scanner) -> CheckReport {
    let mut report = CheckReport::default();

    let traversal_failures = scanner.scan(|path| {
        let doc = match Document::open(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to open document");
                report.failures.push(ScanFailure::new(path, e));
                return;
            }
        };
        report.files += 1;

        let result = MarkdownRenderer::<HtmlBackend>::new().render_markdown(doc.body());
        report
            .issues
            .extend(result.warnings.into_iter().map(|message| MarkerIssue {
                path: path.to_path_buf(),
                message,
            }));
    });
    report.failures.extend(traversal_failures);

    report
}
