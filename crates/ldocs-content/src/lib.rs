//! Content tree maintenance for ldocs.
//!
//! - [`Scanner`] walks a content directory and yields Markdown files one at a
//!   time, logging and collecting I/O failures instead of aborting.
//! - [`TitleRewriter`] copies the text of each page's anchored H1
//!   (`# Title {#anchor}`) into its front matter `title`.
//! - [`check_markers`] renders every page and reports heading marker usage
//!   the renderer does not support.

mod check;
mod scanner;
mod titles;

pub use check::{CheckReport, MarkerIssue, check_markers};
pub use scanner::{ScanFailure, Scanner, is_markdown};
pub use titles::{
    RewriteOutcome, RewriteReport, TitleRewriter, extract_anchored_title, rewrite_file,
};
