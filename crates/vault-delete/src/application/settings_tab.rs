//! The plugin's settings panel.
//!
//! The panel draws onto a host-provided [`SettingsSurface`].  It always clears
//! the surface before drawing, then adds exactly one control: the
//! "Show Delete Notifications" toggle.
//!
//! Changing the toggle updates the shared in-memory settings first and then
//! persists the whole record through the [`SettingsStore`].

use std::sync::Arc;

use tracing::info;

use super::host::HostError;
use super::settings_store::SettingsStore;
use super::SharedSettings;

pub use vault_delete_core::SHOW_DELETE_NOTIFICATION_KEY;

/// A boolean control as the host should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub value: bool,
}

/// Host-provided rendering target for settings controls.
pub trait SettingsSurface {
    /// Removes everything previously drawn.
    fn clear(&mut self);
    fn add_toggle(&mut self, toggle: ToggleControl);
}

pub struct SettingsTab {
    settings: SharedSettings,
    store: Arc<SettingsStore>,
}

impl SettingsTab {
    pub fn new(settings: SharedSettings, store: Arc<SettingsStore>) -> Self {
        Self { settings, store }
    }

    /// Redraws the panel from the current settings.
    pub async fn display(&self, surface: &mut dyn SettingsSurface) {
        let value = self.settings.read().await.show_delete_notification;

        surface.clear();
        surface.add_toggle(ToggleControl {
            key: SHOW_DELETE_NOTIFICATION_KEY,
            name: "Show Delete Notifications",
            description: "Show a notification when a file is deleted",
            value,
        });
    }

    /// Called by the host when the toggle changes.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the record could not be persisted.  The
    /// in-memory value keeps the new state either way.
    pub async fn set_show_delete_notification(&self, value: bool) -> Result<(), HostError> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            settings.show_delete_notification = value;
            settings.clone()
        };
        info!(show_delete_notification = value, "settings changed");
        self.store.save(&snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::host::MockDataStore;
    use serde_json::json;
    use tokio::sync::RwLock;
    use vault_delete_core::PluginSettings;

    #[derive(Default)]
    struct RecordingSurface {
        toggles: Vec<ToggleControl>,
        clears: usize,
    }

    impl SettingsSurface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
            self.toggles.clear();
        }

        fn add_toggle(&mut self, toggle: ToggleControl) {
            self.toggles.push(toggle);
        }
    }

    fn tab_with(settings: PluginSettings, data: MockDataStore) -> (SharedSettings, SettingsTab) {
        let shared: SharedSettings = Arc::new(RwLock::new(settings));
        let store = Arc::new(SettingsStore::new(Arc::new(data)));
        (Arc::clone(&shared), SettingsTab::new(shared, store))
    }

    #[tokio::test]
    async fn test_display_renders_exactly_one_toggle() {
        // Arrange
        let (_, tab) = tab_with(PluginSettings::default(), MockDataStore::new());
        let mut surface = RecordingSurface::default();

        // Act
        tab.display(&mut surface).await;

        // Assert
        assert_eq!(surface.toggles.len(), 1);
        assert_eq!(surface.toggles[0].name, "Show Delete Notifications");
        assert!(surface.toggles[0].value);
    }

    #[tokio::test]
    async fn test_display_clears_stale_controls_first() {
        let (_, tab) = tab_with(PluginSettings::default(), MockDataStore::new());
        let mut surface = RecordingSurface::default();

        tab.display(&mut surface).await;
        tab.display(&mut surface).await;

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.toggles.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_updates_memory_and_persists_other_fields_unchanged() {
        // Arrange
        let mut initial = PluginSettings::default();
        initial.delete_file_setting = json!("custom");
        initial
            .extra
            .insert("confirmBeforeDelete".to_string(), json!(true));

        let mut data = MockDataStore::new();
        data.expect_save_data()
            .withf(|blob| {
                blob == &json!({
                    "deleteFileSetting": "custom",
                    "showDeleteNotification": false,
                    "confirmBeforeDelete": true
                })
            })
            .times(1)
            .returning(|_| Ok(()));
        let (shared, tab) = tab_with(initial, data);

        // Act
        tab.set_show_delete_notification(false).await.unwrap();

        // Assert
        assert!(!shared.read().await.show_delete_notification);
    }

    #[tokio::test]
    async fn test_toggle_keeps_memory_value_when_save_fails() {
        let mut data = MockDataStore::new();
        data.expect_save_data()
            .returning(|_| Err(HostError::Storage("read-only".to_string())));
        let (shared, tab) = tab_with(PluginSettings::default(), data);

        let result = tab.set_show_delete_notification(false).await;

        assert!(result.is_err());
        assert!(!shared.read().await.show_delete_notification);
    }

    #[tokio::test]
    async fn test_display_reflects_latest_toggle_state() {
        let mut data = MockDataStore::new();
        data.expect_save_data().returning(|_| Ok(()));
        let (_, tab) = tab_with(PluginSettings::default(), data);
        let mut surface = RecordingSurface::default();

        tab.set_show_delete_notification(false).await.unwrap();
        tab.display(&mut surface).await;

        assert!(!surface.toggles[0].value);
    }
}
