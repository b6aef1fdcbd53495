//! `ldocs render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use ldocs_meta::Document;
use ldocs_renderer::{
    ApiPreference, HeadingRecord, HtmlBackend, MarkdownRenderer, RenderResult, filter_headings,
};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// API style a reader has chosen.
#[derive(Clone, Copy, ValueEnum)]
enum Preference {
    Options,
    Composition,
}

impl From<Preference> for ApiPreference {
    fn from(value: Preference) -> Self {
        match value {
            Preference::Options => Self::Options,
            Preference::Composition => Self::Composition,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Print a JSON object with title, HTML, headings and warnings.
    #[arg(long)]
    json: bool,

    /// Only list headings visible for this API preference.
    #[arg(long, value_enum)]
    preference: Option<Preference>,
}

/// JSON payload for `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderOutput<'a> {
    title: Option<&'a str>,
    front_matter_title: Option<&'a str>,
    html: &'a str,
    headings: Vec<&'a HeadingRecord>,
    warnings: &'a [String],
}

impl<'a> RenderOutput<'a> {
    fn new(doc: &'a Document, result: &'a RenderResult, preference: Option<ApiPreference>) -> Self {
        let headings = match preference {
            Some(preference) => filter_headings(&result.headings, preference),
            None => result.headings.iter().collect(),
        };
        Self {
            title: result.title.as_deref(),
            front_matter_title: doc.get_str("title"),
            html: &result.html,
            headings,
            warnings: &result.warnings,
        }
    }
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let doc = Document::open(&self.markdown_file)?;
        let result = MarkdownRenderer::<HtmlBackend>::new()
            .with_title_extraction()
            .render_markdown(doc.body());

        for warning in &result.warnings {
            output.file_warning(&self.markdown_file, warning);
        }

        let payload = RenderOutput::new(&doc, &result, self.preference.map(Into::into));
        if self.json {
            output.result(&serde_json::to_string_pretty(&payload)?)?;
        } else {
            output.result(payload.html)?;
        }
        Ok(())
    }
}
