//! Configuration management for ldocs.
//!
//! Parses `ldocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`:
//!
//! - `docs.source_dir`
//! - `sync.upstream_repo`
//! - `sync.translation_repo`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ldocs.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Upstream sync configuration.
    pub sync: SyncConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    exclude: Option<Vec<String>>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Content directory holding the Markdown pages.
    pub source_dir: PathBuf,
    /// File and directory names skipped while walking the content directory.
    pub exclude: Vec<String>,
}

fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_owned()]
}

/// Upstream sync configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Upstream documentation repository (`owner/name`).
    pub upstream_repo: String,
    /// Translation repository pull requests are opened against.
    pub translation_repo: String,
    /// Upstream branch new changes are compared up to.
    pub upstream_branch: String,
    /// Base branch of sync pull requests.
    pub base_branch: String,
    /// Branch holding merged upstream changes.
    pub sync_branch: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            upstream_repo: "vuejs/docs".to_owned(),
            translation_repo: "vuejs-translations/docs-zh-cn".to_owned(),
            upstream_branch: "main".to_owned(),
            base_branch: "main".to_owned(),
            sync_branch: "sync".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sync.upstream_repo`").
        field: String,
        /// Error message (e.g., "${`UPSTREAM`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a repository field to have the `owner/name` form.
fn require_repo(value: &str, field: &str) -> Result<(), ConfigError> {
    let valid = value
        .split_once('/')
        .is_some_and(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'));
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must have the form owner/name, got \"{value}\""
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ldocs.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            sync: SyncConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("src"),
                exclude: default_exclude(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_repo(&self.sync.upstream_repo, "sync.upstream_repo")?;
        require_repo(&self.sync.translation_repo, "sync.translation_repo")?;
        require_non_empty(&self.sync.upstream_branch, "sync.upstream_branch")?;
        require_non_empty(&self.sync.base_branch, "sync.base_branch")?;
        require_non_empty(&self.sync.sync_branch, "sync.sync_branch")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }
        self.sync.upstream_repo = expand::expand_env(&self.sync.upstream_repo, "sync.upstream_repo")?;
        self.sync.translation_repo =
            expand::expand_env(&self.sync.translation_repo, "sync.translation_repo")?;
        Ok(())
    }

    /// Resolve relative paths against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("src")),
            exclude: self.docs.exclude.clone().unwrap_or_else(default_exclude),
        };
    }
}
