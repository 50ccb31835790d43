//! Storage infrastructure: everything the host keeps inside the vault's
//! hidden configuration directory.
//!
//! ```text
//! <vault>/.vault/
//!   app.toml                         host configuration   (config)
//!   plugins/delete-file/data.json    plugin data blob     (plugin_data)
//! ```

use std::path::{Path, PathBuf};

pub mod config;
pub mod plugin_data;

/// Name of the host's configuration directory at the vault root.
pub const CONFIG_DIR_NAME: &str = ".vault";

/// `<vault>/.vault`
pub fn config_dir(vault_root: &Path) -> PathBuf {
    vault_root.join(CONFIG_DIR_NAME)
}
