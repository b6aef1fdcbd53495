//! Front matter titles from anchored H1 headings.
//!
//! Translated pages keep a stable anchor on their H1 (`# 快速上手 {#quick-start}`).
//! The browser tab shows the front matter `title`, so the display text of
//! that heading is copied into it before the site is built.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use ldocs_meta::{Document, MetaError};
use regex::Regex;

use crate::scanner::{ScanFailure, Scanner};

/// Level-1 heading with a trailing `{#anchor}` marker.
static ANCHORED_H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.+)\s+\{#[\w-]+\}$").unwrap());

/// Find the display text of the first anchored H1 in a document body.
///
/// Headings without an anchor marker do not match. Lines inside fenced code
/// blocks are ignored.
///
/// # Examples
///
/// ```
/// use ldocs_content::extract_anchored_title;
///
/// let body = "Intro text\n\n# Getting Started {#getting-started}\n";
/// assert_eq!(extract_anchored_title(body).as_deref(), Some("Getting Started"));
/// assert_eq!(extract_anchored_title("# No Anchor\n"), None);
/// ```
#[must_use]
pub fn extract_anchored_title(body: &str) -> Option<String> {
    let mut open_fence: Option<Fence> = None;
    for line in body.lines() {
        let fence = Fence::parse(line);
        match (open_fence, fence) {
            (None, Some(fence)) => {
                open_fence = Some(fence);
                continue;
            }
            (Some(open), Some(fence)) if fence.closes(open) => {
                open_fence = None;
                continue;
            }
            (Some(_), _) => continue,
            (None, None) => {}
        }
        if let Some(caps) = ANCHORED_H1_RE.captures(line) {
            return caps.get(1).map(|m| m.as_str().trim().to_owned());
        }
    }
    None
}

/// A code fence line: fence character, run length and whether an info
/// string follows the run.
#[derive(Clone, Copy, Debug)]
struct Fence {
    marker: char,
    len: usize,
    has_info: bool,
}

impl Fence {
    /// Parse a line opening or closing a fenced code block.
    fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return None;
        }
        let marker = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
        let len = trimmed.chars().take_while(|&c| c == marker).count();
        if len < 3 {
            return None;
        }
        let info = trimmed[len..].trim();
        if marker == '`' && info.contains('`') {
            return None;
        }
        Some(Self {
            marker,
            len,
            has_info: !info.is_empty(),
        })
    }

    /// A closing fence uses the opening character, is at least as long and
    /// carries no info string.
    fn closes(self, open: Self) -> bool {
        self.marker == open.marker && self.len >= open.len && !self.has_info
    }
}

/// What [`rewrite_file`] did with a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The `title` key was set to this text and the file was saved.
    Rewritten(String),
    /// The `title` key already held the heading text; the file was not written.
    AlreadyCurrent,
    /// No anchored H1 was found; the file was not written.
    NoAnchoredHeading,
}

/// Set a document's front matter `title` from its anchored H1.
///
/// The write is synchronous; on error the file keeps its previous content.
///
/// # Errors
///
/// Returns an error if the file cannot be read, its front matter cannot be
/// parsed, or the rewritten file cannot be saved.
pub fn rewrite_file(path: &Path) -> Result<RewriteOutcome, MetaError> {
    let mut doc = Document::open(path)?;

    let Some(title) = extract_anchored_title(doc.body()) else {
        return Ok(RewriteOutcome::NoAnchoredHeading);
    };

    if doc.get_str("title") == Some(title.as_str()) {
        return Ok(RewriteOutcome::AlreadyCurrent);
    }

    doc.set("title", title.as_str()).save()?;
    Ok(RewriteOutcome::Rewritten(title))
}

/// Summary of a title rewrite pass.
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// Number of Markdown files visited.
    pub scanned: usize,
    /// Files whose title was written.
    pub rewritten: Vec<PathBuf>,
    /// Files left untouched (no anchored heading, or title already current).
    pub unchanged: usize,
    /// Directories and files that could not be processed.
    pub failures: Vec<ScanFailure>,
}

impl RewriteReport {
    /// Check if the pass completed without failures.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Rewrites front matter titles across a content tree.
///
/// The pass never aborts: every failure is logged as a warning and collected
/// in the [`RewriteReport`], leaving the decision to fail to the caller.
#[derive(Clone, Debug)]
pub struct TitleRewriter {
    scanner: Scanner,
}

impl TitleRewriter {
    /// Create a rewriter that walks with the given scanner.
    #[must_use]
    pub fn new(scanner: Scanner) -> Self {
        Self { scanner }
    }

    /// Rewrite every Markdown file under the scanner root, one at a time.
    pub fn run(&self) -> RewriteReport {
        let mut report = RewriteReport::default();

        let traversal_failures = self.scanner.scan(|path| {
            report.scanned += 1;
            match rewrite_file(path) {
                Ok(RewriteOutcome::Rewritten(title)) => {
                    tracing::debug!(path = %path.display(), title = %title, "Rewrote title");
                    report.rewritten.push(path.to_path_buf());
                }
                Ok(RewriteOutcome::AlreadyCurrent | RewriteOutcome::NoAnchoredHeading) => {
                    report.unchanged += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to rewrite title");
                    report.failures.push(ScanFailure::new(path, e));
                }
            }
        });
        report.failures.extend(traversal_failures);

        tracing::info!(
            root = %self.scanner.root().display(),
            scanned = report.scanned,
            rewritten = report.rewritten.len(),
            failures = report.failures.len(),
            "Title rewrite completed"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn rewriter(root: &Path) -> TitleRewriter {
        TitleRewriter::new(Scanner::new(root))
    }

    #[test]
    fn test_extract_anchored_title() {
        assert_eq!(
            extract_anchored_title("# Getting Started {#getting-started}").as_deref(),
            Some("Getting Started")
        );
        assert_eq!(
            extract_anchored_title("# 组合式 API 常见问答 {#composition-api-faq}").as_deref(),
            Some("组合式 API 常见问答")
        );
        assert_eq!(
            extract_anchored_title("text\r\n# Windows {#windows}\r\n").as_deref(),
            Some("Windows")
        );
    }

    #[test]
    fn test_extract_ignores_non_matching_headings() {
        assert_eq!(extract_anchored_title("# Plain Heading\n"), None);
        assert_eq!(extract_anchored_title("## Second {#second}\n"), None);
        assert_eq!(extract_anchored_title("#NoSpace {#x}\n"), None);
        assert_eq!(extract_anchored_title(""), None);
    }

    #[test]
    fn test_extract_takes_first_match_outside_code() {
        let body = "```md\n# In Code {#code}\n```\n# Real {#real}\n# Later {#later}\n";
        assert_eq!(extract_anchored_title(body).as_deref(), Some("Real"));
    }

    #[test]
    fn test_extract_fence_closes_only_on_matching_marker() {
        let body = "~~~\n```\n~~~\n# Real {#real}\n";
        assert_eq!(extract_anchored_title(body).as_deref(), Some("Real"));

        let body = "````md\n```\n# Inside {#inside}\n````\n# After {#after}\n";
        assert_eq!(extract_anchored_title(body).as_deref(), Some("After"));
    }

    #[test]
    fn test_extract_unclosed_fence_hides_rest() {
        assert_eq!(extract_anchored_title("```js\n# Hidden {#hidden}\n"), None);
    }

    #[test]
    fn test_rewrite_file_sets_title_and_keeps_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.md");
        let body = "# Getting Started {#getting-started}\n\nWelcome.\n";
        fs::write(&path, body).unwrap();

        let outcome = rewrite_file(&path).unwrap();

        assert_eq!(outcome, RewriteOutcome::Rewritten("Getting Started".to_owned()));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("---\ntitle: Getting Started\n---\n{body}"));
    }

    #[test]
    fn test_rewrite_file_overwrites_existing_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        fs::write(
            &path,
            "---\ntitle: Old\noutline: deep\n---\n# New Title {#new-title}\n",
        )
        .unwrap();

        rewrite_file(&path).unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.get_str("title"), Some("New Title"));
        assert_eq!(doc.get_str("outline"), Some("deep"));
        assert_eq!(doc.body(), "# New Title {#new-title}\n");
    }

    #[test]
    fn test_rewrite_file_without_anchor_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        for content in ["# Plain\n\ntext\n", "no heading at all\n", "---\nx: 1\n---\n## H2 {#h2}\n"] {
            let path = dir.path().join("page.md");
            fs::write(&path, content).unwrap();

            assert_eq!(rewrite_file(&path).unwrap(), RewriteOutcome::NoAnchoredHeading);
            assert_eq!(fs::read_to_string(&path).unwrap(), content);
        }
    }

    #[test]
    fn test_rewrite_file_current_title_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        let content = "---\ntitle:   Same\n---\n# Same {#same}\n";
        fs::write(&path, content).unwrap();

        assert_eq!(rewrite_file(&path).unwrap(), RewriteOutcome::AlreadyCurrent);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_run_rewrites_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guide")).unwrap();
        fs::write(dir.path().join("index.md"), "# Home {#home}\n").unwrap();
        fs::write(dir.path().join("guide/intro.MD"), "# Intro {#intro}\n").unwrap();
        fs::write(dir.path().join("guide/plain.md"), "# Plain\n").unwrap();
        fs::write(dir.path().join("guide/notes.txt"), "# Notes {#notes}\n").unwrap();

        let report = rewriter(dir.path()).run();

        assert!(report.is_success());
        assert_eq!(report.scanned, 3);
        assert_eq!(report.rewritten.len(), 2);
        assert_eq!(report.unchanged, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("guide/notes.txt")).unwrap(),
            "# Notes {#notes}\n"
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "# A {#a}\n").unwrap();

        let first = rewriter(dir.path()).run();
        let after_first = fs::read_to_string(dir.path().join("a.md")).unwrap();
        let second = rewriter(dir.path()).run();

        assert_eq!(first.rewritten.len(), 1);
        assert!(second.rewritten.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("a.md")).unwrap(), after_first);
    }

    #[test]
    fn test_run_continues_past_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("b.md"), "---\ntitle: [broken\n---\n# B {#b}\n").unwrap();
        fs::write(dir.path().join("c.md"), "# C {#c}\n").unwrap();

        let report = rewriter(dir.path()).run();

        assert_eq!(report.scanned, 3);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.rewritten, vec![dir.path().join("c.md")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_skips_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.md"), "# Hidden {#hidden}\n").unwrap();
        fs::write(dir.path().join("a.md"), "# A {#a}\n").unwrap();
        fs::write(dir.path().join("z.md"), "# Z {#z}\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can still read the directory
        let locked_is_unreadable = fs::read_dir(&locked).is_err();

        let report = rewriter(dir.path()).run();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(report.rewritten.contains(&dir.path().join("a.md")));
        assert!(report.rewritten.contains(&dir.path().join("z.md")));
        if locked_is_unreadable {
            assert_eq!(report.failures.len(), 1);
            assert_eq!(report.failures[0].path, locked);
            assert_eq!(report.rewritten.len(), 2);
        }
    }
}
