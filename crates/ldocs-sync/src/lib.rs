//! Upstream sync helpers for translated documentation.
//!
//! A translation repository records each merge from upstream with a commit
//! titled `sync #<hash>`, where `<hash>` is the abbreviated upstream commit.
//! These helpers find the last synced hash in a commit log and prepare the
//! compare link and pull request text for the next sync.
//!
//! Reading the log is left to the caller, e.g. `git log --format=%B%x00`.
//!
//! # Example
//!
//! ```
//! use ldocs_sync::{PullRequest, latest_sync_hash, split_log};
//!
//! let log = "fix typo\0sync #1a2b3c4\0init\0";
//! let last = latest_sync_hash(split_log(log)).unwrap();
//! let pr = PullRequest::for_sync("vuejs/docs", &last, "9f8e7d6");
//! assert_eq!(pr.title, "Sync #9f8e7d6");
//! assert!(pr.body.contains("https://github.com/vuejs/docs/compare/1a2b3c4...9f8e7d6"));
//! ```

mod log;
mod pull_request;

pub use log::{latest_sync_hash, split_log};
pub use pull_request::{PullRequest, compare_url};

/// Error type for sync operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// No commit in the log looks like a sync commit.
    #[error("No hash found. Are there any commits with a `sync #hash` message in the history?")]
    NoSyncCommit,
}
