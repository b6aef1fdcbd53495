//! In-memory view of a content file: front matter mapping plus body.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tempfile::NamedTempFile;

use crate::split::split_front_matter;

/// A content file opened for front matter access.
///
/// Keys keep their original order; new keys are appended. The body is kept
/// verbatim and written back byte-for-byte.
///
/// There is no locking: two `Document`s opened on the same path overwrite
/// each other on save, last writer wins.
#[derive(Clone, Debug)]
pub struct Document {
    path: PathBuf,
    front_matter: Mapping,
    body: String,
    had_front_matter: bool,
    line_ending: &'static str,
}

/// Error type for front matter operations.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// Reading or writing the file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The front matter block is not valid YAML.
    #[error("{}: invalid front matter: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    /// The front matter block is valid YAML but not a key-value mapping.
    #[error("{}: front matter is not a mapping", path.display())]
    NotAMapping { path: PathBuf },
    /// The mapping could not be serialized back to YAML.
    #[error("{}: failed to serialize front matter: {message}", path.display())]
    Serialize { path: PathBuf, message: String },
}

impl Document {
    /// Read and parse a content file.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::Io`] if the file cannot be read as UTF-8 text and
    /// a parse error if its front matter block is malformed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MetaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MetaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse content that belongs to `path` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::Parse`] for malformed YAML and
    /// [`MetaError::NotAMapping`] if the block is a scalar or sequence.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, MetaError> {
        let path = path.into();
        let split = split_front_matter(content);

        let front_matter = match split.yaml {
            Some(yaml) if !yaml.trim().is_empty() => {
                match serde_yaml::from_str::<Value>(yaml) {
                    Ok(Value::Mapping(mapping)) => mapping,
                    Ok(Value::Null) => Mapping::new(),
                    Ok(_) => return Err(MetaError::NotAMapping { path }),
                    Err(e) => {
                        return Err(MetaError::Parse {
                            path,
                            message: e.to_string(),
                        });
                    }
                }
            }
            _ => Mapping::new(),
        };

        Ok(Self {
            front_matter,
            body: split.body.to_owned(),
            had_front_matter: split.yaml.is_some(),
            line_ending: split.line_ending,
            path,
        })
    }

    /// Path the document was opened from and will be saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Document body after the front matter block.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Front matter mapping.
    #[must_use]
    pub fn front_matter(&self) -> &Mapping {
        &self.front_matter
    }

    /// Check if the front matter has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front_matter.is_empty()
    }

    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.front_matter.get(key)
    }

    /// Look up a top-level key holding a string scalar.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Insert or overwrite a top-level key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.front_matter
            .insert(Value::String(key.into()), value.into());
        self
    }

    /// Insert or overwrite several top-level keys.
    pub fn extend<K, V, I>(&mut self, entries: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
        self
    }

    /// Serialize front matter and body back to file content.
    ///
    /// A document that had no front matter and still has no keys is returned
    /// as its body alone.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::Serialize`] if a value cannot be emitted as YAML.
    pub fn to_markdown(&self) -> Result<String, MetaError> {
        if self.front_matter.is_empty() && !self.had_front_matter {
            return Ok(self.body.clone());
        }

        let yaml = if self.front_matter.is_empty() {
            String::new()
        } else {
            serde_yaml::to_string(&self.front_matter).map_err(|e| MetaError::Serialize {
                path: self.path.clone(),
                message: e.to_string(),
            })?
        };

        let eol = self.line_ending;
        let mut out = String::with_capacity(yaml.len() + self.body.len() + 8);
        out.push_str("---");
        out.push_str(eol);
        if eol == "\n" {
            out.push_str(&yaml);
        } else {
            out.push_str(&yaml.replace('\n', eol));
        }
        out.push_str("---");
        out.push_str(eol);
        out.push_str(&self.body);
        Ok(out)
    }

    /// Write the document back to its path, replacing the file.
    ///
    /// The content is written to a temporary file next to the target and
    /// renamed over it, so readers see either the old or the new file. A
    /// symlinked path keeps its link and the target file is replaced; file
    /// permissions are carried over.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::Io`] if the write fails; the file keeps its
    /// previous content in that case.
    pub fn save(&self) -> Result<(), MetaError> {
        let content = self.to_markdown()?;
        let io_error = |source: io::Error| MetaError::Io {
            path: self.path.clone(),
            source,
        };

        let target = match fs::canonicalize(&self.path) {
            Ok(target) => target,
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(io_error(e)),
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
        tmp.write_all(content.as_bytes()).map_err(io_error)?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(io_error)?;
        }
        tmp.persist(&target).map_err(|e| io_error(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_reads_keys_and_body() {
        let doc = Document::parse("a.md", "---\ntitle: Intro\norder: 2\n---\n# Intro\n").unwrap();
        assert_eq!(doc.get_str("title"), Some("Intro"));
        assert_eq!(doc.get("order"), Some(&Value::from(2)));
        assert_eq!(doc.body(), "# Intro\n");
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_parse_without_front_matter() {
        let doc = Document::parse("a.md", "# Intro\n").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.body(), "# Intro\n");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Document::parse("a.md", "---\ntitle: [oops\n---\nbody").unwrap_err();
        assert!(matches!(err, MetaError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_parse_scalar_front_matter_is_rejected() {
        let err = Document::parse("a.md", "---\njust text\n---\nbody").unwrap_err();
        assert!(matches!(err, MetaError::NotAMapping { .. }), "got {err:?}");
    }

    #[test]
    fn test_untouched_document_without_front_matter_round_trips() {
        let content = "# Only body\n\ntext\n";
        let doc = Document::parse("a.md", content).unwrap();
        assert_eq!(doc.to_markdown().unwrap(), content);
    }

    #[test]
    fn test_set_adds_front_matter_block() {
        let mut doc = Document::parse("a.md", "# Guide {#guide}\n\nBody.\n").unwrap();
        doc.set("title", "Guide");
        assert_eq!(
            doc.to_markdown().unwrap(),
            "---\ntitle: Guide\n---\n# Guide {#guide}\n\nBody.\n"
        );
    }

    #[test]
    fn test_set_overwrites_and_preserves_order() {
        let mut doc =
            Document::parse("a.md", "---\ntitle: Old\naside: false\n---\nbody\n").unwrap();
        doc.set("title", "New").set("footer", true);
        assert_eq!(
            doc.to_markdown().unwrap(),
            "---\ntitle: New\naside: false\nfooter: true\n---\nbody\n"
        );
    }

    #[test]
    fn test_extend_sets_all_keys() {
        let mut doc = Document::parse("a.md", "body").unwrap();
        doc.extend([("a", "1"), ("b", "2")]);
        assert_eq!(doc.get_str("a"), Some("1"));
        assert_eq!(doc.get_str("b"), Some("2"));
    }

    #[test]
    fn test_empty_block_is_kept() {
        let doc = Document::parse("a.md", "---\n---\nbody").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.to_markdown().unwrap(), "---\n---\nbody");
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let mut doc = Document::parse("a.md", "---\r\nlang: en\r\n---\r\nbody\r\n").unwrap();
        doc.set("title", "T");
        assert_eq!(
            doc.to_markdown().unwrap(),
            "---\r\nlang: en\r\ntitle: T\r\n---\r\nbody\r\n"
        );
    }

    #[test]
    fn test_save_then_reopen_preserves_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "---\nouter: yes\nlist:\n  - a\n  - b\n---\n# Page\n").unwrap();

        Document::open(&path)
            .unwrap()
            .set("title", "Getting Started")
            .save()
            .unwrap();

        let reopened = Document::open(&path).unwrap();
        assert_eq!(reopened.get_str("title"), Some("Getting Started"));
        assert_eq!(reopened.get_str("outer"), Some("yes"));
        assert!(reopened.get("list").is_some_and(Value::is_sequence));
        assert_eq!(reopened.body(), "# Page\n");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::open(dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, MetaError::Io { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::parse(dir.path().join("nope/page.md"), "body").unwrap();
        let err = doc.set("title", "x").save().unwrap_err();
        assert!(matches!(err, MetaError::Io { .. }));
    }

    #[test]
    fn test_failed_save_keeps_target_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "kept").unwrap();

        let mut doc = Document::parse(&path, "# Page\n").unwrap();
        let err = doc.set("title", "Page").save().unwrap_err();

        assert!(matches!(err, MetaError::Io { .. }));
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "kept");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_replaces_target() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target.md");
        let link = dir.path().join("link.md");
        fs::write(&target, "# Linked\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        Document::open(&link)
            .unwrap()
            .set("title", "Linked")
            .save()
            .unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "---\ntitle: Linked\n---\n# Linked\n"
        );
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
