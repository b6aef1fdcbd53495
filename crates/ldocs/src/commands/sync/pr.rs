//! `ldocs sync pr` command implementation.

use ldocs_sync::PullRequest;

use super::SyncArgs;
use crate::error::CliError;
use crate::output::Output;

pub(super) fn pull_request(args: &SyncArgs) -> Result<(), CliError> {
    let output = Output::new();
    let ctx = args.resolve()?;
    let sync = &ctx.config.sync;

    let pr = PullRequest::for_sync(&sync.upstream_repo, &ctx.last_synced, &ctx.upstream);

    output.title(&pr.title);
    output.info(&pr.body);
    output.result(&pr.quick_pull_url(
        &sync.translation_repo,
        &sync.base_branch,
        &sync.sync_branch,
    ))?;
    Ok(())
}
