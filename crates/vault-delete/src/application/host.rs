//! Host ports: everything the plugin needs from the application it runs in.
//!
//! The plugin never touches the file system, the terminal or a settings file
//! directly.  Each capability is a small trait implemented by the
//! infrastructure layer (see `infrastructure::local_vault`) and by test
//! doubles.  [`HostServices`] bundles one implementation of each so the plugin
//! can be constructed with a single argument.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;
use vault_delete_core::{PathError, VaultEvent, VaultFile};

#[cfg(test)]
use mockall::automock;

/// Error type for every host operation.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("file not found in vault: {0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidPath(#[from] PathError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not move {path} to trash: {reason}")]
    Trash { path: String, reason: String },

    #[error("plugin data could not be stored: {0}")]
    Storage(String),

    #[error("notice could not be displayed: {0}")]
    Notice(String),
}

/// The host's file tree: event stream and permanent deletion.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Vault: Send + Sync {
    /// Subscribes to vault events.  Every subscriber sees every event emitted
    /// after the call; events are queued, never dropped, until received.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<VaultEvent>;

    /// Permanently deletes `file`.
    async fn delete(&self, file: &VaultFile) -> Result<(), HostError>;
}

/// The host's file manager: reversible deletion.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileManager: Send + Sync {
    /// Moves `file` to the trash configured by the user.
    async fn trash_file(&self, file: &VaultFile) -> Result<(), HostError>;
}

/// The host's workspace: which document currently has focus.
#[cfg_attr(test, automock)]
pub trait Workspace: Send + Sync {
    fn active_file(&self) -> Option<VaultFile>;
}

/// Transient, auto-dismissing user-facing messages.
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str) -> Result<(), HostError>;
}

/// Diagnostic output (the host's developer console).
pub trait Console: Send + Sync {
    fn log(&self, line: &str);
    fn error(&self, line: &str);
}

/// Opaque per-plugin persisted data.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Returns the stored blob, or `None` if nothing has been saved yet.
    async fn load_data(&self) -> Result<Option<Value>, HostError>;

    /// Replaces the stored blob.
    async fn save_data(&self, data: &Value) -> Result<(), HostError>;
}

/// One implementation of every host port.
#[derive(Clone)]
pub struct HostServices {
    pub vault: Arc<dyn Vault>,
    pub file_manager: Arc<dyn FileManager>,
    pub workspace: Arc<dyn Workspace>,
    pub notifier: Arc<dyn Notifier>,
    pub console: Arc<dyn Console>,
    pub data: Arc<dyn DataStore>,
}
