//! Parsing of trailing heading markers.
//!
//! A raw heading is parsed once into [`HeadingMarkers`]; both the rendered
//! HTML and the heading record are derived from that single result.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::heading::HeadingMode;

/// Trailing `{#slug}` anchor marker preceded by non-empty text.
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\{#([a-z0-9\-_]+)\}\s*$").unwrap());

/// Trailing run of `*` with optional preceding whitespace.
static MODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*?)\s*(\*+)$").unwrap());

/// Heading text with its markers separated out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingMarkers {
    /// Display text with all markers removed.
    pub title: String,
    /// API mode derived from trailing asterisks.
    pub mode: HeadingMode,
    /// Slug from a trailing `{#slug}` marker.
    pub anchor: Option<String>,
}

impl HeadingMarkers {
    /// Parse the plain text of a heading.
    ///
    /// Asterisks are recognized on either side of the anchor marker
    /// (`Title * {#id}` and `Title {#id} *`), but such headings are
    /// reported by [`is_combined`](Self::is_combined) since authors should
    /// not rely on that combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldocs_renderer::{HeadingMarkers, HeadingMode};
    ///
    /// let markers = HeadingMarkers::parse("Lifecycle Hooks {#lifecycle-hooks}");
    /// assert_eq!(markers.title, "Lifecycle Hooks");
    /// assert_eq!(markers.anchor.as_deref(), Some("lifecycle-hooks"));
    /// assert_eq!(markers.mode, HeadingMode::Both);
    ///
    /// let markers = HeadingMarkers::parse("Computed Properties *");
    /// assert_eq!(markers.title, "Computed Properties");
    /// assert_eq!(markers.mode, HeadingMode::OptionsOnly);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (rest, mut mode) = strip_mode_marker(raw);

        let (title, anchor) = match split_anchor(rest) {
            Some((body, slug)) => (body, Some(slug.to_owned())),
            None => (rest, None),
        };

        let title = if mode == HeadingMode::Both {
            let (title, inner_mode) = strip_mode_marker(title);
            mode = inner_mode;
            title
        } else {
            title
        };

        Self {
            title: title.to_owned(),
            mode,
            anchor,
        }
    }

    /// Check if the heading carried both a mode marker and an anchor marker.
    #[must_use]
    pub fn is_combined(&self) -> bool {
        self.mode != HeadingMode::Both && self.anchor.is_some()
    }
}

/// Remove a trailing `{#slug}` anchor marker.
///
/// Only the marker and the whitespace before it are removed; leading text is
/// kept as is. Text that does not end with a well-formed marker is returned
/// unchanged, so stripping is idempotent.
///
/// # Examples
///
/// ```
/// use ldocs_renderer::strip_anchor;
///
/// assert_eq!(strip_anchor("Getting Started {#getting-started}"), "Getting Started");
/// assert_eq!(strip_anchor("Broken {#marker"), "Broken {#marker");
/// ```
#[must_use]
pub fn strip_anchor(text: &str) -> Cow<'_, str> {
    match split_anchor(text) {
        Some((body, _)) => Cow::Borrowed(body),
        None => Cow::Borrowed(text),
    }
}

/// Remove trailing asterisks and classify the heading mode.
///
/// Two or more asterisks mean Composition API only, exactly one means
/// Options API only.
///
/// # Examples
///
/// ```
/// use ldocs_renderer::{HeadingMode, strip_mode_marker};
///
/// assert_eq!(strip_mode_marker("setup() **"), ("setup()", HeadingMode::CompositionOnly));
/// assert_eq!(strip_mode_marker("data *"), ("data", HeadingMode::OptionsOnly));
/// assert_eq!(strip_mode_marker("props"), ("props", HeadingMode::Both));
/// ```
#[must_use]
pub fn strip_mode_marker(text: &str) -> (&str, HeadingMode) {
    let Some(caps) = MODE_RE.captures(text) else {
        return (text, HeadingMode::Both);
    };
    let body = caps.get(1).map_or("", |m| m.as_str()).trim_end();
    let stars = caps.get(2).map_or(0, |m| m.len());
    let mode = if stars >= 2 {
        HeadingMode::CompositionOnly
    } else {
        HeadingMode::OptionsOnly
    };
    (body, mode)
}

/// Split text into (body, slug) if it ends with an anchor marker.
fn split_anchor(text: &str) -> Option<(&str, &str)> {
    let caps = ANCHOR_RE.captures(text)?;
    Some((caps.get(1)?.as_str().trim_end(), caps.get(2)?.as_str()))
}
