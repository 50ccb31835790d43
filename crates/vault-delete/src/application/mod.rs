//! Application layer: the plugin itself.
//!
//! Everything in here talks to the host exclusively through the traits in
//! [`host`], so the whole plugin runs unchanged against the local vault
//! adapter, a future embedding, or test doubles.
//!
//! # Sub-modules
//!
//! - **`host`**              – Ports the host must implement.
//! - **`settings_store`**    – Loads/saves the settings record (defaults merge).
//! - **`observe_deletions`** – Notice + diagnostic line for every deletion.
//! - **`commands`**          – "Delete Current File" and "Move Current File to Trash".
//! - **`settings_tab`**      – The one-toggle settings panel.
//! - **`plugin`**            – Load/unload lifecycle wiring all of the above.

use std::sync::Arc;

use tokio::sync::RwLock;
use vault_delete_core::PluginSettings;

pub mod commands;
pub mod host;
pub mod observe_deletions;
pub mod plugin;
pub mod settings_store;
pub mod settings_tab;

#[cfg(test)]
mod test_support;

/// The plugin's settings record, shared by the observer and the settings tab.
pub type SharedSettings = Arc<RwLock<PluginSettings>>;
