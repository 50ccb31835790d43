//! Infrastructure layer: the local vault host.
//!
//! Contains the adapters that implement the plugin's host ports on top of a
//! vault directory, its hidden configuration folder and the terminal.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `vault_delete_core`, but MUST NOT be imported by the `application` layer.

pub mod local_vault;
pub mod storage;
pub mod ui;

use std::sync::Arc;

use crate::application::host::{Console, HostServices, Notifier};
use crate::application::plugin::PLUGIN_ID;
use local_vault::LocalVault;
use storage::plugin_data::JsonDataStore;
use ui::console::TracingConsole;
use ui::notice::TerminalNotifier;

/// Wires a [`LocalVault`] and the terminal adapters into [`HostServices`].
pub fn local_host(vault: Arc<LocalVault>) -> HostServices {
    host_with(
        vault,
        Arc::new(TerminalNotifier::stderr()),
        Arc::new(TracingConsole),
    )
}

/// Same as [`local_host`] with caller-supplied notice and console adapters.
pub fn host_with(
    vault: Arc<LocalVault>,
    notifier: Arc<dyn Notifier>,
    console: Arc<dyn Console>,
) -> HostServices {
    let data = JsonDataStore::for_plugin(vault.root(), PLUGIN_ID);
    HostServices {
        vault: Arc::clone(&vault) as _,
        file_manager: Arc::clone(&vault) as _,
        workspace: vault as _,
        notifier,
        console,
        data: Arc::new(data),
    }
}
