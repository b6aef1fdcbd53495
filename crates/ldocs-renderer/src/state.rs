//! Shared state structs for markdown rendering.
//!
//! These structs track context during event processing for one document.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

use crate::heading::HeadingRecord;
use crate::markers::HeadingMarkers;

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    /// Whether we're inside a code block.
    active: bool,
    /// Language of current code block (e.g., "vue", "js").
    language: Option<String>,
    /// Buffer for code block content.
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with optional language.
    pub fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// End the current code block and return (language, content).
    pub fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub fn end_head(&mut self) {
        self.in_head = false;
    }

    pub fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Get the alignment style for the current cell.
    pub fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for tracking image alt text capture.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    pub fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// A heading ready to be written to the output.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CompletedHeading {
    pub level: u8,
    pub id: String,
    pub html: String,
}

/// Open heading: level plus an id supplied by the parser, if any.
struct OpenHeading {
    level: u8,
    explicit_id: Option<String>,
}

/// State for heading annotation and title extraction.
///
/// Owns the heading records of the document being rendered. A fresh state
/// is used for each render pass.
pub(crate) struct HeadingState {
    /// Whether to extract title from first H1.
    extract_title: bool,
    /// Extracted title from first H1.
    title: Option<String>,
    /// Heading currently being buffered.
    current: Option<OpenHeading>,
    /// Buffer for heading plain text (markers and slug).
    text: String,
    /// Buffer for heading HTML (with inline formatting).
    html: String,
    /// Records for every rendered heading except the extracted title.
    headings: Vec<HeadingRecord>,
    /// Warnings about unsupported marker usage.
    warnings: Vec<String>,
    /// Counter for generating unique heading IDs.
    id_counts: HashMap<String, usize>,
}

impl HeadingState {
    pub fn new(extract_title: bool) -> Self {
        Self {
            extract_title,
            title: None,
            current: None,
            text: String::new(),
            html: String::new(),
            headings: Vec::new(),
            warnings: Vec::new(),
            id_counts: HashMap::new(),
        }
    }

    /// Check if we're currently inside a heading.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Start buffering a heading.
    pub fn start_heading(&mut self, level: u8, explicit_id: Option<String>) {
        self.current = Some(OpenHeading { level, explicit_id });
        self.text.clear();
        self.html.clear();
    }

    /// Complete the current heading.
    ///
    /// Parses the buffered text for markers, strips the same markers from
    /// the buffered HTML and records the heading. Returns `None` if no
    /// heading is open.
    pub fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let OpenHeading { level, explicit_id } = self.current.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);

        let markers = HeadingMarkers::parse(&text);
        if markers.is_combined() {
            self.warnings.push(format!(
                "heading \"{}\" combines a mode marker with an anchor marker",
                text.trim()
            ));
        }

        let html = strip_marker_suffix(&html, text.trim(), &markers.title);

        let base_id = markers
            .anchor
            .clone()
            .or(explicit_id)
            .unwrap_or_else(|| heading_slug(&markers.title));
        let id = self.unique_id(base_id);

        let is_title = self.extract_title && level == 1 && self.title.is_none();
        if is_title {
            self.title = Some(markers.title.clone());
        } else {
            self.headings
                .push(HeadingRecord::new(level, id.clone(), &markers));
        }

        Some(CompletedHeading { level, id, html })
    }

    /// Make an ID unique within the document.
    fn unique_id(&mut self, base_id: String) -> String {
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }

    /// Append text to the plain text buffer.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append HTML to the heading HTML buffer.
    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub fn html_buffer(&mut self) -> &mut String {
        &mut self.html
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    pub fn take_headings(&mut self) -> Vec<HeadingRecord> {
        std::mem::take(&mut self.headings)
    }

    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}

/// Remove the marker suffix that was stripped from the plain text.
///
/// Markers are literal text, so the removed tail of the plain text also ends
/// the HTML. If it does not (markers inside inline formatting), the HTML is
/// left as is.
fn strip_marker_suffix(html: &str, text: &str, title: &str) -> String {
    let html = html.trim();
    let suffix = text.strip_prefix(title).unwrap_or("");
    if suffix.is_empty() {
        return html.to_owned();
    }
    match html.strip_suffix(suffix) {
        Some(stripped) => stripped.trim_end().to_owned(),
        None => html.to_owned(),
    }
}

/// Slug for a heading without an explicit id.
///
/// Headings whose text slugifies to nothing (e.g. `## **`) share the
/// `heading` base so they still get distinct, non-empty ids.
fn heading_slug(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        "heading".to_owned()
    } else {
        slug
    }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
