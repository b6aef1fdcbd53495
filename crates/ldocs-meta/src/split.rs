//! Splitting raw file content into front matter and body.

/// Delimiter line that opens and closes a front matter block.
const DELIMITER: &str = "---";

/// Raw content split at the front matter boundary.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Split<'a> {
    /// YAML source between the delimiters, `None` if the file has no block.
    pub yaml: Option<&'a str>,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
    /// Line ending used by the opening delimiter.
    pub line_ending: &'static str,
}

/// Split content into front matter and body.
///
/// The block must start on the first line with `---` and end at the next line
/// consisting of `---`. An unterminated block is not front matter: the whole
/// content is returned as body.
pub(crate) fn split_front_matter(content: &str) -> Split<'_> {
    let no_block = Split {
        yaml: None,
        body: content,
        line_ending: detect_line_ending(content),
    };

    let Some(first_end) = content.find('\n') else {
        return no_block;
    };
    let first_line = &content[..first_end];
    if first_line.trim_end() != DELIMITER {
        return no_block;
    }
    let line_ending = if first_line.ends_with('\r') {
        "\r\n"
    } else {
        "\n"
    };

    let yaml_start = first_end + 1;
    let mut pos = yaml_start;
    while pos <= content.len() {
        let (line, next) = match content[pos..].find('\n') {
            Some(offset) => (&content[pos..pos + offset], pos + offset + 1),
            None => (&content[pos..], content.len() + 1),
        };
        if line.trim_end() == DELIMITER {
            return Split {
                yaml: Some(&content[yaml_start..pos]),
                body: content.get(next..).unwrap_or(""),
                line_ending,
            };
        }
        pos = next;
    }

    no_block
}

fn detect_line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(idx) if idx > 0 && content.as_bytes()[idx - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_block() {
        let split = split_front_matter("---\ntitle: A\n---\n# A\n");
        assert_eq!(split.yaml, Some("title: A\n"));
        assert_eq!(split.body, "# A\n");
        assert_eq!(split.line_ending, "\n");
    }

    #[test]
    fn test_split_without_block() {
        let split = split_front_matter("# Heading\n\ntext\n");
        assert_eq!(split.yaml, None);
        assert_eq!(split.body, "# Heading\n\ntext\n");
    }

    #[test]
    fn test_split_empty_block() {
        let split = split_front_matter("---\n---\nbody");
        assert_eq!(split.yaml, Some(""));
        assert_eq!(split.body, "body");
    }

    #[test]
    fn test_split_closing_delimiter_at_eof() {
        let split = split_front_matter("---\nkey: v\n---");
        assert_eq!(split.yaml, Some("key: v\n"));
        assert_eq!(split.body, "");
    }

    #[test]
    fn test_split_crlf() {
        let split = split_front_matter("---\r\nkey: v\r\n---\r\nbody\r\n");
        assert_eq!(split.yaml, Some("key: v\r\n"));
        assert_eq!(split.body, "body\r\n");
        assert_eq!(split.line_ending, "\r\n");
    }

    #[test]
    fn test_split_unterminated_block_is_body() {
        let content = "---\nkey: v\nno end";
        let split = split_front_matter(content);
        assert_eq!(split.yaml, None);
        assert_eq!(split.body, content);
    }

    #[test]
    fn test_horizontal_rule_later_in_file_is_not_front_matter() {
        let content = "# Title\n\n---\n\nmore\n";
        let split = split_front_matter(content);
        assert_eq!(split.yaml, None);
        assert_eq!(split.body, content);
    }
}
