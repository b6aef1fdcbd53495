//! Commit log scanning.

use std::sync::LazyLock;

use regex::Regex;

use crate::SyncError;

/// First line of a sync commit: `sync #<7 or 8 word chars>`, optional trailing text.
static SYNC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^sync #(\w{7}\w?)(?:\s.*)?$").unwrap());

/// Split raw log output into commit messages.
///
/// Messages separated by NUL bytes (`git log --format=%B%x00`) are split on
/// NUL; otherwise every non-empty line is one message.
pub fn split_log(log: &str) -> Vec<&str> {
    let records: Vec<&str> = if log.contains('\0') {
        log.split('\0').collect()
    } else {
        log.lines().collect()
    };
    records
        .into_iter()
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .collect()
}

/// Find the upstream hash of the most recent sync commit.
///
/// Messages are expected newest first, as `git log` prints them.
///
/// # Errors
///
/// Returns [`SyncError::NoSyncCommit`] if no message matches.
pub fn latest_sync_hash<'a, I>(messages: I) -> Result<String, SyncError>
where
    I: IntoIterator<Item = &'a str>,
{
    messages
        .into_iter()
        .find_map(|message| {
            let first_line = message.trim().lines().next()?;
            let caps = SYNC_RE.captures(first_line.trim_end())?;
            Some(caps.get(1)?.as_str().to_owned())
        })
        .ok_or(SyncError::NoSyncCommit)
}
