//! `ldocs sync` subcommand group.

mod compare;
mod pr;

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use ldocs_config::Config;
use ldocs_sync::{latest_sync_hash, split_log};

use compare::compare;
use pr::pull_request;

use crate::error::CliError;

/// Upstream sync commands.
#[derive(Subcommand)]
pub(crate) enum SyncCommand {
    /// Print the upstream compare URL since the last sync.
    Compare(SyncArgs),
    /// Print the title, body and quick-pull URL for the next sync PR.
    Pr(SyncArgs),
}

impl SyncCommand {
    /// Execute the sync subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Compare(args) => compare(&args),
            Self::Pr(args) => pull_request(&args),
        }
    }
}

/// Arguments shared by the sync commands.
#[derive(Args)]
pub(crate) struct SyncArgs {
    /// Path to configuration file (default: auto-discover ldocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File with commit messages, e.g. from `git log --format=%B%x00`
    /// (default: read stdin).
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Upstream commit to compare up to (default: the configured upstream branch).
    #[arg(long, env = "LDOCS_UPSTREAM_HASH")]
    upstream_hash: Option<String>,
}

/// Values resolved from arguments, config and the commit log.
struct SyncContext {
    config: Config,
    last_synced: String,
    upstream: String,
}

impl SyncArgs {
    fn resolve(&self) -> Result<SyncContext, CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let log = self.read_log()?;
        let last_synced = latest_sync_hash(split_log(&log))?;
        tracing::info!(last_synced = %last_synced, "Found last sync commit");

        let upstream = self
            .upstream_hash
            .clone()
            .unwrap_or_else(|| config.sync.upstream_branch.clone());

        Ok(SyncContext {
            config,
            last_synced,
            upstream,
        })
    }

    fn read_log(&self) -> Result<String, CliError> {
        match &self.log {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut log = String::new();
                std::io::stdin().read_to_string(&mut log)?;
                Ok(log)
            }
        }
    }
}
