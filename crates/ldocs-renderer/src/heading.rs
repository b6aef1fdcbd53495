//! Heading records collected during a render pass.

use crate::markers::HeadingMarkers;

/// Which API style a heading belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum HeadingMode {
    /// Shown under both preferences.
    #[default]
    Both,
    /// Marked with a single trailing `*`.
    OptionsOnly,
    /// Marked with two or more trailing `*`.
    CompositionOnly,
}

/// Reading preference toggle used to filter headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ApiPreference {
    Options,
    Composition,
}

/// A heading rendered in one document.
///
/// `composition_only` and `options_only` are never both set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HeadingRecord {
    /// Heading level (1-6).
    pub level: u8,
    /// Display text with markers removed.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
    /// Heading ended with `**`.
    pub composition_only: bool,
    /// Heading ended with a single `*`.
    pub options_only: bool,
}

impl HeadingRecord {
    /// Build a record from parsed heading markers.
    #[must_use]
    pub fn new(level: u8, id: String, markers: &HeadingMarkers) -> Self {
        Self {
            level,
            title: markers.title.clone(),
            id,
            composition_only: markers.mode == HeadingMode::CompositionOnly,
            options_only: markers.mode == HeadingMode::OptionsOnly,
        }
    }

    /// Mode encoded by the record flags.
    #[must_use]
    pub fn mode(&self) -> HeadingMode {
        match (self.composition_only, self.options_only) {
            (true, _) => HeadingMode::CompositionOnly,
            (false, true) => HeadingMode::OptionsOnly,
            (false, false) => HeadingMode::Both,
        }
    }

    /// Check if the heading is shown under the given preference.
    #[must_use]
    pub fn is_visible_for(&self, preference: ApiPreference) -> bool {
        match self.mode() {
            HeadingMode::Both => true,
            HeadingMode::OptionsOnly => preference == ApiPreference::Options,
            HeadingMode::CompositionOnly => preference == ApiPreference::Composition,
        }
    }
}

/// Select the headings shown under `preference`, keeping document order.
#[must_use]
pub fn filter_headings(headings: &[HeadingRecord], preference: ApiPreference) -> Vec<&HeadingRecord> {
    headings
        .iter()
        .filter(|h| h.is_visible_for(preference))
        .collect()
}
