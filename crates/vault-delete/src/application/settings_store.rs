//! Loads and saves [`PluginSettings`] through the host's [`DataStore`].
//!
//! Loading never fails: a missing, unreadable or malformed blob resolves to
//! the defaults.  Saving reports failures to the caller and does not retry.

use std::sync::Arc;

use tracing::{debug, warn};
use vault_delete_core::PluginSettings;

use super::host::{DataStore, HostError};

pub struct SettingsStore {
    data: Arc<dyn DataStore>,
}

impl SettingsStore {
    pub fn new(data: Arc<dyn DataStore>) -> Self {
        Self { data }
    }

    /// Returns `{...defaults, ...persisted}`.
    pub async fn load(&self) -> PluginSettings {
        let persisted = match self.data.load_data().await {
            Ok(blob) => blob,
            Err(e) => {
                warn!("could not read plugin data, using defaults: {e}");
                return PluginSettings::default();
            }
        };

        match PluginSettings::from_persisted(persisted) {
            Ok(merged) => {
                for &key in &merged.rejected_keys {
                    warn!(key, "persisted setting has the wrong type, using its default");
                }
                debug!(settings = ?merged.settings, "plugin settings loaded");
                merged.settings
            }
            Err(e) => {
                warn!("ignoring persisted plugin data: {e}");
                PluginSettings::default()
            }
        }
    }

    /// Writes the full record.
    ///
    /// # Errors
    ///
    /// Propagates the host's [`HostError`] unchanged; a record that cannot be
    /// serialised is reported as [`HostError::Storage`].
    pub async fn save(&self, settings: &PluginSettings) -> Result<(), HostError> {
        let blob = settings
            .to_persisted()
            .map_err(|e| HostError::Storage(e.to_string()))?;
        self.data.save_data(&blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::host::MockDataStore;
    use serde_json::json;

    fn store_returning(blob: Option<serde_json::Value>) -> SettingsStore {
        let mut data = MockDataStore::new();
        data.expect_load_data()
            .times(1)
            .returning(move || Ok(blob.clone()));
        SettingsStore::new(Arc::new(data))
    }

    #[tokio::test]
    async fn test_load_without_persisted_data_uses_defaults() {
        let settings = store_returning(None).load().await;
        assert_eq!(settings, PluginSettings::default());
    }

    #[tokio::test]
    async fn test_load_missing_key_defaults_to_showing_notices() {
        let settings = store_returning(Some(json!({ "deleteFileSetting": "x" })))
            .load()
            .await;
        assert!(settings.show_delete_notification);
    }

    #[tokio::test]
    async fn test_load_respects_persisted_false() {
        let settings = store_returning(Some(json!({ "showDeleteNotification": false })))
            .load()
            .await;
        assert!(!settings.show_delete_notification);
    }

    #[tokio::test]
    async fn test_load_keeps_valid_keys_when_another_has_unexpected_type() {
        // Arrange
        let store = store_returning(Some(
            json!({ "showDeleteNotification": false, "deleteFileSetting": 5 }),
        ));

        // Act
        let settings = store.load().await;

        // Assert
        assert!(!settings.show_delete_notification);
        assert_eq!(settings.delete_file_setting, json!(5));
    }

    #[tokio::test]
    async fn test_load_malformed_data_falls_back_to_defaults() {
        let settings = store_returning(Some(json!("not an object"))).load().await;
        assert_eq!(settings, PluginSettings::default());
    }

    #[tokio::test]
    async fn test_load_read_failure_falls_back_to_defaults() {
        // Arrange
        let mut data = MockDataStore::new();
        data.expect_load_data()
            .returning(|| Err(HostError::Storage("disk on fire".to_string())));
        let store = SettingsStore::new(Arc::new(data));

        // Act
        let settings = store.load().await;

        // Assert
        assert_eq!(settings, PluginSettings::default());
    }

    #[tokio::test]
    async fn test_save_writes_full_record() {
        // Arrange
        let mut data = MockDataStore::new();
        data.expect_save_data()
            .withf(|blob| {
                blob == &json!({ "deleteFileSetting": "default", "showDeleteNotification": false })
            })
            .times(1)
            .returning(|_| Ok(()));
        let store = SettingsStore::new(Arc::new(data));
        let settings = PluginSettings {
            show_delete_notification: false,
            ..PluginSettings::default()
        };

        // Act
        let result = store.save(&settings).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_propagates_host_failure() {
        let mut data = MockDataStore::new();
        data.expect_save_data()
            .returning(|_| Err(HostError::Storage("read-only".to_string())));
        let store = SettingsStore::new(Arc::new(data));

        let result = store.save(&PluginSettings::default()).await;

        assert!(matches!(result, Err(HostError::Storage(_))));
    }
}
