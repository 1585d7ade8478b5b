use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;

/// Parse a JSON array of camelCase entry objects.
pub fn parse_json(content: &str) -> AppResult<Vec<TimeEntry>> {
    let entries: Vec<TimeEntry> = serde_json::from_str(content)?;
    Ok(entries)
}
