//! Events a host emits when its file tree changes.

use super::file::VaultFile;

/// A change in the vault observed by the host.
///
/// Only deletions are modelled; the plugin has no interest in creations or
/// renames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEvent {
    /// The file or folder no longer exists in the vault, whatever removed it.
    Delete(VaultFile),
}

impl VaultEvent {
    /// The file the event refers to.
    pub fn file(&self) -> &VaultFile {
        match self {
            VaultEvent::Delete(file) => file,
        }
    }
}
