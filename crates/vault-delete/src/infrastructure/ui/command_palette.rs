//! Command palette adapter: resolves command identifiers to plugin handlers.
//!
//! The host knows commands only by their string id and display name.  The
//! palette is built from whatever the plugin registers at load time and
//! rejects ids it has never seen.

use thiserror::Error;
use tracing::debug;

use crate::application::commands::{CommandId, CommandOutcome};
use crate::application::plugin::DeleteFilePlugin;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("no command registered with id '{0}'")]
    UnknownCommand(String),
}

/// One row of the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: &'static str,
    pub name: &'static str,
    command: CommandId,
}

pub struct CommandPalette<'p> {
    plugin: &'p DeleteFilePlugin,
    entries: Vec<PaletteEntry>,
}

impl<'p> CommandPalette<'p> {
    /// Registers every command the plugin contributes.
    pub fn register(plugin: &'p DeleteFilePlugin) -> Self {
        let entries = plugin
            .commands()
            .iter()
            .map(|&command| PaletteEntry {
                id: command.id(),
                name: command.name(),
                command,
            })
            .collect();
        Self { plugin, entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Runs the command registered under `id`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownCommand`] if nothing is registered under `id`.
    pub async fn invoke(&self, id: &str) -> Result<CommandOutcome, PaletteError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| PaletteError::UnknownCommand(id.to_string()))?;

        debug!(id, name = entry.name, "invoking command");
        Ok(self.plugin.run_command(entry.command).await)
    }
}
