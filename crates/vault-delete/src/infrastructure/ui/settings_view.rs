//! Plain-text [`SettingsSurface`] used by the CLI.

use std::fmt;

use crate::application::settings_tab::{SettingsSurface, ToggleControl};

/// Collects controls and renders them as text, one block per control:
///
/// ```text
/// [x] Show Delete Notifications  (showDeleteNotification)
///     Show a notification when a file is deleted
/// ```
#[derive(Debug, Default)]
pub struct TextSettingsView {
    toggles: Vec<ToggleControl>,
}

impl TextSettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggles(&self) -> &[ToggleControl] {
        &self.toggles
    }
}

impl SettingsSurface for TextSettingsView {
    fn clear(&mut self) {
        self.toggles.clear();
    }

    fn add_toggle(&mut self, toggle: ToggleControl) {
        self.toggles.push(toggle);
    }
}

impl fmt::Display for TextSettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for toggle in &self.toggles {
            let mark = if toggle.value { 'x' } else { ' ' };
            writeln!(f, "[{mark}] {}  ({})", toggle.name, toggle.key)?;
            writeln!(f, "    {}", toggle.description)?;
        }
        Ok(())
    }
}
