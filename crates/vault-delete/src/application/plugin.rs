//! DeleteFilePlugin: explicit load / unload lifecycle.
//!
//! ```text
//! load(host)
//!  ├─ SettingsStore::load()          defaults merged with persisted data
//!  ├─ DeletionObserver::run()        subscribed to host vault events
//!  ├─ FileCommands                   delete-current-file, move-current-file-to-trash
//!  └─ SettingsTab                    one toggle
//! unload()
//!  └─ drains queued events, stops the observer task
//! ```
//!
//! The plugin owns the settings record; the observer and the settings tab
//! share it through an `Arc<RwLock<_>>` and nothing else can reach it.

use std::sync::Arc;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use vault_delete_core::{messages, PluginSettings};

use super::commands::{CommandId, CommandOutcome, FileCommands};
use super::host::{Console, HostServices};
use super::observe_deletions::DeletionObserver;
use super::settings_store::SettingsStore;
use super::settings_tab::SettingsTab;
use super::SharedSettings;

/// Identifier the host uses for this plugin's data directory.
pub const PLUGIN_ID: &str = "delete-file";

pub struct DeleteFilePlugin {
    settings: SharedSettings,
    commands: FileCommands,
    settings_tab: SettingsTab,
    console: Arc<dyn Console>,
    observer_task: Option<JoinHandle<()>>,
    observer_shutdown: Option<oneshot::Sender<()>>,
}

impl DeleteFilePlugin {
    /// Loads settings and registers the deletion observer with the host.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn load(host: HostServices) -> Self {
        let store = Arc::new(SettingsStore::new(Arc::clone(&host.data)));
        let settings: SharedSettings = Arc::new(RwLock::new(store.load().await));

        let observer = Arc::new(DeletionObserver::new(
            Arc::clone(&settings),
            Arc::clone(&host.notifier),
            Arc::clone(&host.console),
        ));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let events = host.vault.subscribe();
        let observer_task = tokio::spawn(observer.run(events, shutdown_rx));

        let commands = FileCommands::new(
            Arc::clone(&host.workspace),
            Arc::clone(&host.vault),
            Arc::clone(&host.file_manager),
            Arc::clone(&host.notifier),
            Arc::clone(&host.console),
        );
        let settings_tab = SettingsTab::new(Arc::clone(&settings), store);

        info!(plugin = PLUGIN_ID, "plugin loaded");
        Self {
            settings,
            commands,
            settings_tab,
            console: host.console,
            observer_task: Some(observer_task),
            observer_shutdown: Some(shutdown_tx),
        }
    }

    /// Commands to register with the host, in palette order.
    pub fn commands(&self) -> &'static [CommandId] {
        CommandId::ALL
    }

    /// Runs one command; never fails.
    pub async fn run_command(&self, command: CommandId) -> CommandOutcome {
        self.commands.execute(command).await
    }

    pub fn settings_tab(&self) -> &SettingsTab {
        &self.settings_tab
    }

    /// Snapshot of the current settings.
    pub async fn settings(&self) -> PluginSettings {
        self.settings.read().await.clone()
    }

    /// Stops the deletion observer after it has handled every event already
    /// delivered to it.
    pub async fn unload(mut self) {
        if let Some(shutdown) = self.observer_shutdown.take() {
            // The task may already have exited because the host closed the channel.
            let _ = shutdown.send(());
        }
        if let Some(task) = self.observer_task.take() {
            if let Err(e) = task.await {
                warn!("deletion observer task ended abnormally: {e}");
            }
        }
        self.console.log(messages::UNLOADED);
        info!(plugin = PLUGIN_ID, "plugin unloaded");
    }
}

impl Drop for DeleteFilePlugin {
    fn drop(&mut self) {
        if let Some(task) = self.observer_task.take() {
            task.abort();
        }
    }
}
