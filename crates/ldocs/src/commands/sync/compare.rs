//! `ldocs sync compare` command implementation.

use ldocs_sync::compare_url;

use super::SyncArgs;
use crate::error::CliError;
use crate::output::Output;

pub(super) fn compare(args: &SyncArgs) -> Result<(), CliError> {
    let output = Output::new();
    let ctx = args.resolve()?;

    output.info(&format!("Last synced: {}", ctx.last_synced));
    output.result(&compare_url(
        &ctx.config.sync.upstream_repo,
        &ctx.last_synced,
        &ctx.upstream,
    ))?;
    Ok(())
}
