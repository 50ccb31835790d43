//! Trash-move back ends for [`LocalVault`](super::LocalVault).
//!
//! - **System**: hands the file to the OS recycle bin via the `trash` crate.
//!   That call blocks, so it runs on Tokio's blocking pool.
//! - **Local**: renames the file into `<vault>/.trash/`, keeping its name.  If
//!   the name is taken, ` 1`, ` 2`, ... is inserted before the extension.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::TRASH_DIR_NAME;
use crate::application::host::HostError;

/// Moves `abs_path` to the operating system trash.
///
/// # Errors
///
/// [`HostError::Trash`] if the OS refuses or the blocking task panics.
pub async fn move_to_system_trash(abs_path: PathBuf, vault_path: &str) -> Result<(), HostError> {
    let trash_error = |reason: String| HostError::Trash {
        path: vault_path.to_string(),
        reason,
    };

    tokio::task::spawn_blocking(move || ::trash::delete(&abs_path))
        .await
        .map_err(|e| trash_error(e.to_string()))?
        .map_err(|e| trash_error(e.to_string()))?;
    debug!(path = vault_path, "handed to system trash");
    Ok(())
}

/// Moves `abs_path` into `<vault_root>/.trash/` and returns its new location.
///
/// # Errors
///
/// [`HostError::Io`] if the trash folder cannot be created or the rename fails.
pub async fn move_to_local_trash(vault_root: &Path, abs_path: &Path) -> Result<PathBuf, HostError> {
    let trash_dir = vault_root.join(TRASH_DIR_NAME);
    tokio::fs::create_dir_all(&trash_dir)
        .await
        .map_err(|source| HostError::Io {
            path: trash_dir.clone(),
            source,
        })?;

    let name = abs_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| HostError::NotFound(abs_path.display().to_string()))?;
    let destination = unique_destination(&trash_dir, name);

    tokio::fs::rename(abs_path, &destination)
        .await
        .map_err(|source| HostError::Io {
            path: abs_path.to_path_buf(),
            source,
        })?;
    Ok(destination)
}

/// First free path in `dir` for `name`: `name`, then `stem 1.ext`, `stem 2.ext`, ...
pub fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    };
    (1u32..)
        .map(|n| dir.join(format!("{stem} {n}{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
