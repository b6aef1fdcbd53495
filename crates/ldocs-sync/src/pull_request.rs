//! Compare links and pull request content for sync branches.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_ENCODE_SET).to_string()
}

/// GitHub compare URL between two revisions of `repo` (`owner/name`).
#[must_use]
pub fn compare_url(repo: &str, from: &str, to: &str) -> String {
    format!("https://github.com/{repo}/compare/{from}...{to}")
}

/// Title and body of a sync pull request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullRequest {
    pub title: String,
    pub body: String,
}

impl PullRequest {
    /// Content for a PR that syncs upstream changes up to `upstream_hash`.
    ///
    /// The body links the upstream diff since the last synced hash so
    /// reviewers can see what is being translated.
    #[must_use]
    pub fn for_sync(upstream_repo: &str, last_synced: &str, upstream_hash: &str) -> Self {
        Self {
            title: format!("Sync #{upstream_hash}"),
            body: format!(
                "## Description of Problem\n\n{}\n",
                compare_url(upstream_repo, last_synced, upstream_hash)
            ),
        }
    }

    /// URL that opens GitHub's pull request form prefilled with this content.
    #[must_use]
    pub fn quick_pull_url(&self, repo: &str, base: &str, head: &str) -> String {
        format!(
            "https://github.com/{repo}/compare/{base}...{head}?quick_pull=1&title={}&body={}",
            encode_component(&self.title),
            encode_component(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compare_url() {
        assert_eq!(
            compare_url("vuejs/docs", "abc1234", "main"),
            "https://github.com/vuejs/docs/compare/abc1234...main"
        );
    }

    #[test]
    fn test_for_sync() {
        let pr = PullRequest::for_sync("vuejs/docs", "abc1234", "def5678");
        assert_eq!(pr.title, "Sync #def5678");
        assert_eq!(
            pr.body,
            "## Description of Problem\n\nhttps://github.com/vuejs/docs/compare/abc1234...def5678\n"
        );
    }

    #[test]
    fn test_quick_pull_url_encodes_query() {
        let pr = PullRequest {
            title: "Sync #def5678".to_owned(),
            body: "## A b\n".to_owned(),
        };
        assert_eq!(
            pr.quick_pull_url("vuejs-translations/docs-zh-cn", "main", "sync"),
            "https://github.com/vuejs-translations/docs-zh-cn/compare/main...sync\
             ?quick_pull=1&title=Sync%20%23def5678&body=%23%23%20A%20b%0A"
        );
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("中"), "%E4%B8%AD");
    }
}
