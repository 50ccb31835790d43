//! The plugin settings record and its load-time merge rules.
//!
//! The record is stored by the host as an opaque JSON blob:
//!
//! ```json
//! {
//!   "deleteFileSetting": "default",
//!   "showDeleteNotification": true
//! }
//! ```
//!
//! # Merge semantics
//!
//! Loading is a shallow merge of the defaults with whatever was persisted:
//! every persisted key wins, every absent key takes its default.  Each key is
//! merged on its own, so a known key holding a value of the wrong type only
//! resets that key (see [`MergedSettings::rejected_keys`]).  Keys the plugin
//! does not know about are kept in [`PluginSettings::extra`] and written back
//! untouched, so a newer release's settings survive a round trip through an
//! older one.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Persisted key of [`PluginSettings::delete_file_setting`].
pub const DELETE_FILE_SETTING_KEY: &str = "deleteFileSetting";

/// Persisted key of [`PluginSettings::show_delete_notification`].
pub const SHOW_DELETE_NOTIFICATION_KEY: &str = "showDeleteNotification";

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The persisted blob is valid JSON but not an object (e.g. an array).
    #[error("persisted settings must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("settings could not be serialised: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The complete, always fully populated plugin configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSettings {
    /// Free-form value reserved for future deletion behaviours.  Stored as
    /// whatever JSON the user (or a newer release) put there.
    pub delete_file_setting: Value,
    /// Whether a notice is shown every time a file is deleted.
    pub show_delete_notification: bool,
    /// Persisted keys this version does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            delete_file_setting: Value::String("default".to_string()),
            show_delete_notification: true,
            extra: Map::new(),
        }
    }
}

/// Outcome of merging a persisted blob over the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSettings {
    pub settings: PluginSettings,
    /// Known keys whose persisted value had the wrong type and were reset to
    /// their default.
    pub rejected_keys: Vec<&'static str>,
}

impl PluginSettings {
    /// Merges a persisted blob over the defaults, key by key.
    ///
    /// `None` and JSON `null` mean "nothing persisted yet" and yield the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotAnObject`] when the blob is not an object.
    /// Callers are expected to fall back to [`PluginSettings::default`].
    pub fn from_persisted(persisted: Option<Value>) -> Result<MergedSettings, SettingsError> {
        let map = match persisted {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => return Err(SettingsError::NotAnObject(json_kind(&other))),
        };

        let mut settings = Self::default();
        let mut rejected_keys = Vec::new();
        for (key, value) in map {
            match key.as_str() {
                DELETE_FILE_SETTING_KEY => settings.delete_file_setting = value,
                SHOW_DELETE_NOTIFICATION_KEY => match value {
                    Value::Bool(show) => settings.show_delete_notification = show,
                    _ => rejected_keys.push(SHOW_DELETE_NOTIFICATION_KEY),
                },
                _ => {
                    settings.extra.insert(key, value);
                }
            }
        }

        Ok(MergedSettings {
            settings,
            rejected_keys,
        })
    }

    /// Serialises the full record for persistence.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Serialize`] if `serde_json` rejects the record.
    pub fn to_persisted(&self) -> Result<Value, SettingsError> {
        Ok(serde_json::to_value(self)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
