//! JSON file adapter for the [`DataStore`] port.
//!
//! Each plugin gets `<vault>/.vault/plugins/<plugin-id>/data.json`.  The file
//! holds whatever the plugin saved, pretty-printed so users can edit it.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::config_dir;
use crate::application::host::{DataStore, HostError};

/// `<vault>/.vault/plugins/<plugin_id>/data.json`
pub fn plugin_data_path(vault_root: &Path, plugin_id: &str) -> PathBuf {
    config_dir(vault_root)
        .join("plugins")
        .join(plugin_id)
        .join("data.json")
}

pub struct JsonDataStore {
    path: PathBuf,
}

impl JsonDataStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn for_plugin(vault_root: &Path, plugin_id: &str) -> Self {
        Self::new(plugin_data_path(vault_root, plugin_id))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> HostError {
        HostError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl DataStore for JsonDataStore {
    async fn load_data(&self) -> Result<Option<Value>, HostError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&content)
            .map_err(|e| HostError::Storage(format!("{}: {e}", self.path.display())))?;
        Ok(Some(value))
    }

    async fn save_data(&self, data: &Value) -> Result<(), HostError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| HostError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "plugin data saved");
        Ok(())
    }
}
