//! TOML-based host configuration.
//!
//! Stored at `<vault>/.vault/app.toml`:
//!
//! ```toml
//! [vault]
//! trash_mode = "local"
//!
//! [logging]
//! log_level = "debug"
//! ```
//!
//! Every section and field is optional.  Fields annotated with
//! `#[serde(default = "...")]` take the helper's value when absent, so a
//! missing file, an empty file and a partial file all load successfully.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::config_dir;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level host configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HostConfig {
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where "Move to Trash" sends files.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrashMode {
    /// The operating system's recycle bin.
    #[default]
    System,
    /// The vault's own `.trash` folder.
    Local,
    /// No trash: delete permanently.
    Permanent,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VaultConfig {
    #[serde(default)]
    pub trash_mode: TrashMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            trash_mode: TrashMode::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// `<vault>/.vault/app.toml`
pub fn config_file_path(vault_root: &Path) -> PathBuf {
    config_dir(vault_root).join("app.toml")
}

/// Loads the host configuration, returning defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(vault_root: &Path) -> Result<HostConfig, ConfigError> {
    let path = config_file_path(vault_root);

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HostConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
