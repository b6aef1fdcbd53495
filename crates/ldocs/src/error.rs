//! CLI error types.

use ldocs_config::ConfigError;
use ldocs_meta::MetaError;
use ldocs_sync::SyncError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Meta(#[from] MetaError),

    #[error("{0}")]
    Sync(#[from] SyncError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
