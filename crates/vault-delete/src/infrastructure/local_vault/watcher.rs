//! Vault watcher: reports deletions made outside the host.
//!
//! Sync clients, shells and other editors remove files without going through
//! [`LocalVault`].  The watcher listens to the file system (debounced by
//! 500 ms) and calls [`LocalVault::reconcile`] for every reported path, which
//! emits the usual `Delete` events for entries that vanished.
//!
//! Dropping the [`VaultWatcher`] stops watching.

use std::sync::Arc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::LocalVault;

const DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to create file watcher: {0}")]
    Create(#[source] notify::Error),
    #[error("failed to watch {path}: {source}")]
    Watch {
        path: String,
        #[source]
        source: notify::Error,
    },
}

pub struct VaultWatcher {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
}

impl VaultWatcher {
    /// Starts watching the vault root recursively.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError`] if the platform watcher cannot be created or
    /// attached to the vault root.
    pub fn start(vault: Arc<LocalVault>) -> Result<Self, WatchError> {
        let handler_vault = Arc::clone(&vault);
        let mut debouncer = new_debouncer(DEBOUNCE, move |result: DebounceEventResult| {
            match result {
                Ok(events) => {
                    for event in events {
                        let removed = handler_vault.reconcile(&event.path);
                        if !removed.is_empty() {
                            debug!(count = removed.len(), "external removal detected");
                        }
                    }
                }
                Err(e) => warn!("vault watcher error: {e}"),
            }
        })
        .map_err(WatchError::Create)?;

        debouncer
            .watcher()
            .watch(vault.root(), RecursiveMode::Recursive)
            .map_err(|source| WatchError::Watch {
                path: vault.root().display().to_string(),
                source,
            })?;

        info!(root = %vault.root().display(), "watching vault for external changes");
        Ok(Self {
            _debouncer: debouncer,
        })
    }
}
