//! The two file commands the plugin registers with the host.
//!
//! Both commands share the same shape:
//!
//! ```text
//! active file?  ── no ──►  notice "No active file to delete."     NoActiveFile
//!      │ yes
//!      ▼
//! host request  ── err ─►  console.error + notice "Failed to ..."  Failed
//!      │ ok
//!      ▼
//! Completed   (the DeletionObserver reports the deletion event)
//! ```
//!
//! Nothing ever propagates back into the host's command dispatch: every
//! failure is converted into user feedback and an [`CommandOutcome`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use vault_delete_core::{messages, VaultFile};

use super::host::{Console, FileManager, HostError, Notifier, Vault, Workspace};

/// Commands contributed by the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Permanently deletes the active file.
    DeleteCurrentFile,
    /// Moves the active file to the trash.
    MoveCurrentFileToTrash,
}

impl CommandId {
    pub const ALL: &'static [CommandId] =
        &[CommandId::DeleteCurrentFile, CommandId::MoveCurrentFileToTrash];

    /// Stable identifier used by the command palette.
    pub fn id(self) -> &'static str {
        match self {
            CommandId::DeleteCurrentFile => "delete-current-file",
            CommandId::MoveCurrentFileToTrash => "move-current-file-to-trash",
        }
    }

    /// Display name shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            CommandId::DeleteCurrentFile => "Delete Current File",
            CommandId::MoveCurrentFileToTrash => "Move Current File to Trash",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command id: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for CommandId {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.id() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// How a command invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The host accepted the request.
    Completed,
    /// There was no active file; nothing was requested.
    NoActiveFile,
    /// The host rejected the request; the user was told.
    Failed,
}

/// Executes [`CommandId`]s against the host ports.
pub struct FileCommands {
    workspace: Arc<dyn Workspace>,
    vault: Arc<dyn Vault>,
    file_manager: Arc<dyn FileManager>,
    notifier: Arc<dyn Notifier>,
    console: Arc<dyn Console>,
}

impl FileCommands {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        vault: Arc<dyn Vault>,
        file_manager: Arc<dyn FileManager>,
        notifier: Arc<dyn Notifier>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            workspace,
            vault,
            file_manager,
            notifier,
            console,
        }
    }

    pub async fn execute(&self, command: CommandId) -> CommandOutcome {
        debug!(%command, "executing command");

        let Some(file) = self.workspace.active_file() else {
            self.notify(messages::NO_ACTIVE_FILE);
            return CommandOutcome::NoActiveFile;
        };

        let result = match command {
            CommandId::DeleteCurrentFile => self.vault.delete(&file).await,
            CommandId::MoveCurrentFileToTrash => self.file_manager.trash_file(&file).await,
        };

        match result {
            Ok(()) => {
                info!(%command, path = %file.path, "command completed");
                CommandOutcome::Completed
            }
            Err(e) => {
                self.report_failure(&file, &e);
                CommandOutcome::Failed
            }
        }
    }

    fn report_failure(&self, file: &VaultFile, error: &HostError) {
        self.console.error(&format!("{}: {error}", file.path));
        self.notify(messages::DELETE_FAILED);
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.notifier.notice(message) {
            warn!("notice failed: {e}");
        }
    }
}
