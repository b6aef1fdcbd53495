//! Markdown renderer with heading marker annotation.
//!
//! This crate provides a generic [`MarkdownRenderer`] that produces HTML via
//! the [`RenderBackend`] trait and collects a [`HeadingRecord`] for every
//! heading it renders.
//!
//! # Heading markers
//!
//! Translated pages use two kinds of trailing markers on heading lines:
//!
//! - `## Reactivity {#reactivity}` keeps a stable anchor id across locales.
//!   The marker is removed from the rendered text and used as the heading id.
//! - `## Options *` and `## Setup **` tag a heading as relevant only to the
//!   Options API or the Composition API. The asterisks are removed and the
//!   record is flagged, see [`HeadingMode`].
//!
//! Use [`filter_headings`] to select the headings shown for an [`ApiPreference`].
//!
//! # Example
//!
//! ```
//! use ldocs_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let result = MarkdownRenderer::<HtmlBackend>::new()
//!     .render_markdown("## Setup **\n\n## Methods {#methods}");
//!
//! assert_eq!(
//!     result.html,
//!     r#"<h2 id="setup">Setup</h2><h2 id="methods">Methods</h2>"#
//! );
//! assert!(result.headings[0].composition_only);
//! assert_eq!(result.headings[1].id, "methods");
//! ```

mod backend;
mod heading;
mod html;
mod markers;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use heading::{ApiPreference, HeadingMode, HeadingRecord, filter_headings};
pub use html::HtmlBackend;
pub use markers::{HeadingMarkers, strip_anchor, strip_mode_marker};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{escape_html, slugify};
