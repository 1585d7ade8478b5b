//! Read-only loading of time entries exported by the surrounding app.

mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::break_interval::total_break_minutes;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Utc};
use std::path::Path;

pub use self::csv::parse_csv;
pub use self::json::parse_json;

/// Load entries from `path`, picking the parser from the file extension.
///
/// A missing file yields an empty list: nothing has been tracked yet.
pub fn load_entries(path: &Path, now: DateTime<Utc>) -> AppResult<Vec<TimeEntry>> {
    if !path.exists() {
        log::warn!("entry file {} not found, assuming no entries", path.display());
        return Ok(Vec::new());
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let raw = match ext.as_str() {
        "json" => parse_json(&std::fs::read_to_string(path)?)?,
        "csv" => parse_csv(std::fs::File::open(path)?)?,
        other => return Err(AppError::InvalidEntryFormat(other.to_string())),
    };

    let entries = raw
        .into_iter()
        .map(|e| normalize(e, now))
        .collect::<AppResult<Vec<_>>>()?;

    log::info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Check data integrity and derive `break_minutes` from break intervals
/// when only the intervals were recorded.
pub fn normalize(mut entry: TimeEntry, now: DateTime<Utc>) -> AppResult<TimeEntry> {
    if let Some(out) = entry.clock_out
        && out < entry.clock_in
    {
        return Err(AppError::InvalidEntry {
            id: entry.id,
            reason: format!("clock-out {out} is before clock-in {}", entry.clock_in),
        });
    }

    if entry.break_minutes < 0 {
        return Err(AppError::InvalidEntry {
            id: entry.id,
            reason: format!("negative break minutes ({})", entry.break_minutes),
        });
    }

    if entry.break_minutes == 0 && !entry.breaks.is_empty() {
        entry.break_minutes = total_break_minutes(&entry.breaks, entry.end_or(now));
    }

    Ok(entry)
}
