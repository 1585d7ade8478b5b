use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::io::Read;

/// Flat CSV row; breaks are only available as the aggregated minutes.
#[derive(Debug, Deserialize)]
struct EntryRow {
    id: String,
    date: NaiveDate,
    clock_in: DateTime<Utc>,
    clock_out: Option<DateTime<Utc>>, // empty cell ⇔ open session
    break_minutes: Option<i64>,
    #[serde(default)]
    task: Option<String>,
}

impl From<EntryRow> for TimeEntry {
    fn from(row: EntryRow) -> Self {
        let mut entry = TimeEntry::new(
            row.id,
            row.date,
            row.clock_in,
            row.clock_out,
            row.break_minutes.unwrap_or(0),
        );
        entry.task = row.task.filter(|t| !t.trim().is_empty());
        entry
    }
}

/// Parse `id,date,clock_in,clock_out,break_minutes,task` rows (header required).
pub fn parse_csv<R: Read>(reader: R) -> AppResult<Vec<TimeEntry>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut entries: Vec<TimeEntry> = Vec::new();
    for row in rdr.deserialize::<EntryRow>() {
        entries.push(row?.into());
    }

    Ok(entries)
}
