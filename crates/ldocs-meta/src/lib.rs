//! Front matter access for ldocs content files.
//!
//! Content files carry an optional leading YAML block delimited by `---`
//! lines. [`Document`] reads that block into an ordered mapping, lets callers
//! set keys, and writes the file back with the body untouched.
//!
//! # Example
//!
//! ```
//! use ldocs_meta::Document;
//!
//! let mut doc = Document::parse("guide.md", "---\nlang: en\n---\n# Guide\n").unwrap();
//! doc.set("title", "Guide");
//! assert_eq!(
//!     doc.to_markdown().unwrap(),
//!     "---\nlang: en\ntitle: Guide\n---\n# Guide\n"
//! );
//! ```

mod document;
mod split;

pub use document::{Document, MetaError};
pub use serde_yaml::{Mapping, Value};
