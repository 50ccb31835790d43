//! # vault-delete-core
//!
//! Shared domain types for the vault-delete plugin.
//!
//! This crate has zero dependencies on the file system, the async runtime or
//! any host application API.  It defines:
//!
//! - **`domain::file`** – [`VaultFile`], the identity of a file or folder
//!   inside a vault, and the path normalisation rules every host adapter uses.
//!
//! - **`domain::settings`** – [`PluginSettings`], the single persisted record,
//!   and the shallow "defaults first, persisted keys win" merge used on load.
//!
//! - **`domain::event`** – [`VaultEvent`], the notifications a host emits when
//!   its file tree changes.
//!
//! - **`messages`** – the exact notice and diagnostic strings shown to users.

pub mod domain;
pub mod messages;

pub use domain::event::VaultEvent;
pub use domain::file::{normalize_path, path_is_within, PathError, VaultFile};
pub use domain::settings::{
    MergedSettings, PluginSettings, SettingsError, DELETE_FILE_SETTING_KEY,
    SHOW_DELETE_NOTIFICATION_KEY,
};
