//! Per-day aggregation of net worked minutes.

use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, NaiveDate, Utc};

/// Net minutes booked on `date`, summed over every session attributed to it.
/// Open sessions count up to `now`.
pub fn minutes_for_date(entries: &[TimeEntry], date: NaiveDate, now: DateTime<Utc>) -> i64 {
    entries
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.net_minutes(now))
        .fold(0, i64::saturating_add)
}

/// Calendar day `now` falls on. Attribution keys are UTC dates.
pub fn today_of(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}
