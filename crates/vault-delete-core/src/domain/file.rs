//! File identity inside a vault.
//!
//! A [`VaultFile`] is the only thing the plugin knows about a file: its path
//! relative to the vault root.  Paths are always stored in normalised form:
//!
//! - `/` separated (backslashes are converted),
//! - no leading `/`, no empty, `.` or `..` segments.
//!
//! Host adapters call [`normalize_path`] on anything that comes from outside
//! (CLI arguments, watcher events) before building a `VaultFile`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a path cannot be expressed relative to the vault root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("absolute paths are not allowed: {0}")]
    Absolute(String),
    #[error("path escapes the vault: {0}")]
    EscapesVault(String),
}

/// A file or folder in the vault, identified by its vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VaultFile {
    pub path: String,
}

impl VaultFile {
    /// Builds a `VaultFile` from a raw path, normalising it first.
    ///
    /// # Errors
    ///
    /// See [`normalize_path`].
    pub fn new(path: &str) -> Result<Self, PathError> {
        Ok(Self {
            path: normalize_path(path)?,
        })
    }

    /// Returns `true` if `self` is `other` or lies below it.
    pub fn is_within(&self, other: &VaultFile) -> bool {
        path_is_within(&self.path, &other.path)
    }
}

impl fmt::Display for VaultFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Returns `true` if the normalised `path` is `ancestor` or lies below it.
pub fn path_is_within(path: &str, ancestor: &str) -> bool {
    path == ancestor
        || (path.starts_with(ancestor) && path.as_bytes().get(ancestor.len()) == Some(&b'/'))
}

/// Normalises `raw` into a vault-relative, `/`-separated path.
///
/// # Errors
///
/// - [`PathError::Empty`] if nothing is left after normalisation.
/// - [`PathError::Absolute`] for `/x`, `\x` or drive-letter paths (`C:\x`).
/// - [`PathError::EscapesVault`] if any segment is `..`.
pub fn normalize_path(raw: &str) -> Result<String, PathError> {
    let unified = raw.replace('\\', "/");
    let bytes = unified.as_bytes();
    let has_drive = bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic();
    if unified.starts_with('/') || has_drive {
        return Err(PathError::Absolute(raw.to_string()));
    }

    let mut segments = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(PathError::EscapesVault(raw.to_string())),
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(segments.join("/"))
}
