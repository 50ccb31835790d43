//! User-facing notice texts and diagnostic log lines.
//!
//! Keeping every string in one place lets tests assert on the exact wording.

use chrono::{DateTime, TimeZone};

/// Notice shown when a command needs an active file and there is none.
pub const NO_ACTIVE_FILE: &str = "No active file to delete.";

/// Notice shown when the host rejects a delete or trash request.
pub const DELETE_FAILED: &str = "Failed to delete the file.";

/// Diagnostic line written when the plugin is unloaded.
pub const UNLOADED: &str = "DeleteFilePlugin unloaded";

/// Notice shown after a deletion when notifications are enabled.
pub fn file_deleted_notice(path: &str) -> String {
    format!("File deleted: {path}")
}

/// Diagnostic line written for every deletion, e.g.
/// `File deleted: notes/a.md at 10/17/2026, 3:04:05 PM`.
pub fn file_deleted_log_line<Tz>(path: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("File deleted: {path} at {}", format_timestamp(at))
}

/// Formats a timestamp as `M/D/YYYY, h:mm:ss AM`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
