//! Markdown file discovery by filesystem walking.
//!
//! The walk is sequential and best-effort: a directory or entry that cannot
//! be read is logged, recorded as a [`ScanFailure`] and skipped, and the walk
//! continues with its siblings.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// An I/O failure encountered while walking or processing content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanFailure {
    /// Path that could not be processed.
    pub path: PathBuf,
    /// Error message.
    pub message: String,
}

impl ScanFailure {
    /// Create a failure for `path` from any displayable error.
    pub fn new(path: impl Into<PathBuf>, error: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Check if a path has the Markdown extension (case-insensitive).
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Walks a content directory and visits every Markdown file.
///
/// Symlinked files are visited; symlinked directories are not followed, so
/// the walk always terminates.
#[derive(Clone, Debug)]
pub struct Scanner {
    root: PathBuf,
    exclude: Vec<String>,
}

impl Scanner {
    /// Create a scanner rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
        }
    }

    /// Skip files and directories with any of these names.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Root directory of the walk.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree, calling `visit` for each Markdown file in turn.
    ///
    /// Entries are visited in name order. Each file is handed to `visit`
    /// before the walk moves on, so processing is strictly sequential.
    ///
    /// Returns the traversal failures; failures inside `visit` are the
    /// caller's to record.
    pub fn scan<F>(&self, mut visit: F) -> Vec<ScanFailure>
    where
        F: FnMut(&Path),
    {
        let mut failures = Vec::new();
        self.scan_directory(&self.root, &mut visit, &mut failures);
        failures
    }

    fn scan_directory<F>(&self, dir: &Path, visit: &mut F, failures: &mut Vec<ScanFailure>)
    where
        F: FnMut(&Path),
    {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Failed to read directory, skipping");
                failures.push(ScanFailure::new(dir, e));
                return;
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "Failed to read directory entry");
                    failures.push(ScanFailure::new(dir, e));
                    None
                }
            })
            .collect();
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name();
            if self.exclude.iter().any(|ex| name.to_string_lossy() == ex.as_str()) {
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to stat entry");
                    failures.push(ScanFailure::new(&path, e));
                    continue;
                }
            };

            if file_type.is_dir() {
                self.scan_directory(&path, visit, failures);
            } else if file_type.is_file() {
                if is_markdown(&path) {
                    visit(&path);
                }
            } else if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => {
                        if is_markdown(&path) {
                            visit(&path);
                        }
                    }
                    Ok(_) => {
                        tracing::debug!(path = %path.display(), "Not following symlink");
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to resolve symlink");
                        failures.push(ScanFailure::new(&path, e));
                    }
                }
            }
        }
    }
}
