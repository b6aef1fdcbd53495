//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod rewrite_titles;
pub(crate) mod sync;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use rewrite_titles::RewriteTitlesArgs;
pub(crate) use sync::SyncCommand;

use std::path::{Path, PathBuf};

use ldocs_config::{CliSettings, Config};
use ldocs_content::Scanner;

use crate::error::CliError;

/// Load configuration and build a scanner over the content directory.
pub(crate) fn load_scanner(
    config_path: Option<&Path>,
    source_dir: Option<PathBuf>,
) -> Result<Scanner, CliError> {
    let cli_settings = CliSettings { source_dir };
    let config = Config::load(config_path, Some(&cli_settings))?;
    let docs = config.docs_resolved;
    Ok(Scanner::new(docs.source_dir).with_exclude(docs.exclude))
}
