//! Local vault host: a directory on disk acting as the host application.
//!
//! [`LocalVault`] implements the [`Vault`], [`FileManager`] and [`Workspace`]
//! ports on top of a vault directory:
//!
//! - an in-memory **index** of every file and folder (except the `.vault`
//!   config directory and the `.trash` folder), built when the vault is opened;
//! - the **active file**, chosen by the embedding (e.g. the CLI `--active` flag);
//! - one unbounded event queue per subscriber, so a large folder deletion
//!   never drops [`VaultEvent`]s.
//!
//! # One event per removed entry
//!
//! A removal can be observed twice: once by the host operation that performed
//! it and once by the [`watcher`].  Both paths go through [`LocalVault::forget`],
//! which only emits events for entries it actually removed from the index, so
//! subscribers see each deletion exactly once.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use vault_delete_core::{normalize_path, path_is_within, VaultEvent, VaultFile};

use crate::application::host::{FileManager, HostError, Vault, Workspace};
use crate::infrastructure::storage::config::TrashMode;
use crate::infrastructure::storage::CONFIG_DIR_NAME;

pub mod recycle;
pub mod watcher;

/// Name of the vault-local trash folder used by [`TrashMode::Local`].
pub const TRASH_DIR_NAME: &str = ".trash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

pub struct LocalVault {
    root: PathBuf,
    trash_mode: TrashMode,
    index: Mutex<BTreeMap<String, EntryKind>>,
    active: Mutex<Option<VaultFile>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<VaultEvent>>>,
}

impl LocalVault {
    /// Opens the vault at `root` and indexes its contents.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Io`] if `root` cannot be resolved or read.
    pub fn open(root: &Path, trash_mode: TrashMode) -> Result<Self, HostError> {
        let root = std::fs::canonicalize(root).map_err(|source| HostError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let index = scan(&root)?;
        info!(root = %root.display(), entries = index.len(), ?trash_mode, "vault opened");

        Ok(Self {
            root,
            trash_mode,
            index: Mutex::new(index),
            active: Mutex::new(None),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the kind of the indexed entry at `path`, if any.
    pub fn entry(&self, path: &str) -> Option<EntryKind> {
        self.index().get(path).copied()
    }

    /// Focuses `path`, which must be an indexed file.
    ///
    /// # Errors
    ///
    /// [`HostError::InvalidPath`] for paths outside the vault and
    /// [`HostError::NotFound`] for anything that is not an indexed file.
    pub fn set_active_file(&self, path: &str) -> Result<VaultFile, HostError> {
        let file = VaultFile::new(path)?;
        if self.entry(&file.path) != Some(EntryKind::File) {
            return Err(HostError::NotFound(file.path));
        }
        *lock(&self.active) = Some(file.clone());
        debug!(path = %file.path, "active file set");
        Ok(file)
    }

    /// Absolute location of `file` on disk.
    pub fn resolve(&self, file: &VaultFile) -> PathBuf {
        file.path.split('/').fold(self.root.clone(), |acc, seg| acc.join(seg))
    }

    /// Removes `file` and everything below it from the index and emits one
    /// `Delete` event per removed entry, children before parents.
    ///
    /// Returns the removed entries; empty if `file` was not indexed.
    pub fn forget(&self, file: &VaultFile) -> Vec<VaultFile> {
        let removed: Vec<VaultFile> = {
            let mut index = self.index();
            let doomed: Vec<String> = index
                .keys()
                .filter(|path| path_is_within(path, &file.path))
                .cloned()
                .collect();
            for path in &doomed {
                index.remove(path);
            }
            // Reverse lexical order puts `a/b` before `a`.
            doomed.into_iter().rev().map(|path| VaultFile { path }).collect()
        };

        if removed.is_empty() {
            return removed;
        }

        {
            let mut active = lock(&self.active);
            if active.as_ref().is_some_and(|a| a.is_within(file)) {
                *active = None;
            }
        }

        for entry in &removed {
            debug!(path = %entry.path, "entry removed from vault");
            self.emit(VaultEvent::Delete(entry.clone()));
        }
        removed
    }

    /// Queues `event` for every live subscriber and drops the ones that hung up.
    fn emit(&self, event: VaultEvent) {
        let mut subscribers = lock(&self.subscribers);
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        if subscribers.is_empty() {
            debug!("no vault event subscribers");
        }
    }

    /// Brings the index in line with what is on disk at `abs_path`.
    ///
    /// Vanished entries are forgotten (emitting events); new ones are indexed
    /// together with their missing parent folders and, for a new folder,
    /// everything below it.  Paths outside the vault or inside ignored folders
    /// are skipped.
    pub fn reconcile(&self, abs_path: &Path) -> Vec<VaultFile> {
        let Some(rel) = relative_path(&self.root, abs_path) else {
            return Vec::new();
        };
        if is_ignored(&rel) {
            return Vec::new();
        }

        let meta = match std::fs::symlink_metadata(abs_path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return self.forget(&VaultFile { path: rel });
            }
            Err(e) => {
                warn!(path = %rel, "cannot inspect changed entry: {e}");
                return Vec::new();
            }
        };

        let mut found = BTreeMap::new();
        for (idx, _) in rel.match_indices('/') {
            found.insert(rel[..idx].to_string(), EntryKind::Folder);
        }
        if meta.is_dir() {
            if let Err(e) = scan_into(&self.root, abs_path, &mut found) {
                warn!(path = %rel, "new folder only partially indexed: {e}");
            }
            found.insert(rel, EntryKind::Folder);
        } else {
            found.insert(rel, EntryKind::File);
        }

        let mut index = self.index();
        for (path, kind) in found {
            index.entry(path).or_insert(kind);
        }
        Vec::new()
    }

    /// Checks that `file` is an indexed entry and returns its kind.
    fn require(&self, file: &VaultFile) -> Result<EntryKind, HostError> {
        self.entry(&file.path)
            .ok_or_else(|| HostError::NotFound(file.path.clone()))
    }

    async fn remove_permanently(&self, file: &VaultFile) -> Result<(), HostError> {
        let kind = self.require(file)?;
        let path = self.resolve(file);

        let result = match kind {
            EntryKind::Folder => tokio::fs::remove_dir_all(&path).await,
            EntryKind::File => tokio::fs::remove_file(&path).await,
        };
        result.map_err(|source| HostError::Io { path, source })?;

        self.forget(file);
        Ok(())
    }

    fn index(&self) -> MutexGuard<'_, BTreeMap<String, EntryKind>> {
        lock(&self.index)
    }
}

#[async_trait]
impl Vault for LocalVault {
    fn subscribe(&self) -> mpsc::UnboundedReceiver<VaultEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.subscribers).push(tx);
        rx
    }

    async fn delete(&self, file: &VaultFile) -> Result<(), HostError> {
        self.remove_permanently(file).await?;
        info!(path = %file.path, "deleted permanently");
        Ok(())
    }
}

#[async_trait]
impl FileManager for LocalVault {
    async fn trash_file(&self, file: &VaultFile) -> Result<(), HostError> {
        self.require(file)?;

        match self.trash_mode {
            TrashMode::System => {
                recycle::move_to_system_trash(self.resolve(file), &file.path).await?;
                self.forget(file);
            }
            TrashMode::Local => {
                let destination = recycle::move_to_local_trash(&self.root, &self.resolve(file)).await?;
                debug!(to = %destination.display(), "moved into vault trash");
                self.forget(file);
            }
            TrashMode::Permanent => self.remove_permanently(file).await?,
        }

        info!(path = %file.path, mode = ?self.trash_mode, "moved to trash");
        Ok(())
    }
}

impl Workspace for LocalVault {
    fn active_file(&self) -> Option<VaultFile> {
        lock(&self.active).clone()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Entries under the host's own folders are never part of the vault.
fn is_ignored(rel: &str) -> bool {
    let first = rel.split('/').next().unwrap_or(rel);
    first == CONFIG_DIR_NAME || first == TRASH_DIR_NAME
}

/// Converts an absolute path below `root` into a normalised vault path.
pub(crate) fn relative_path(root: &Path, abs_path: &Path) -> Option<String> {
    let rel = abs_path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(seg) => segments.push(seg.to_str()?),
            _ => return None,
        }
    }
    normalize_path(&segments.join("/")).ok()
}

fn scan(root: &Path) -> Result<BTreeMap<String, EntryKind>, HostError> {
    let mut index = BTreeMap::new();
    scan_into(root, root, &mut index)?;
    Ok(index)
}

/// Indexes everything below `start`, which must lie inside `root`.
fn scan_into(
    root: &Path,
    start: &Path,
    index: &mut BTreeMap<String, EntryKind>,
) -> Result<(), HostError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| HostError::Io { path, source }
    };

    let mut pending = vec![start.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).map_err(io_err(&dir))? {
            let entry = entry.map_err(io_err(&dir))?;
            let path = entry.path();
            let Some(rel) = relative_path(root, &path) else {
                continue;
            };
            if is_ignored(&rel) {
                continue;
            }
            if entry.file_type().map_err(io_err(&path))?.is_dir() {
                index.insert(rel, EntryKind::Folder);
                pending.push(path);
            } else {
                index.insert(rel, EntryKind::File);
            }
        }
    }
    Ok(())
}
