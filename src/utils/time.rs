//! Timestamp utilities: parsing the reference instant.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Reference instant: the one given on the command line, or the system clock.
pub fn resolve_now(input: Option<&String>) -> AppResult<DateTime<Utc>> {
    match input {
        Some(s) => parse_timestamp(s),
        None => Ok(Utc::now()),
    }
}
