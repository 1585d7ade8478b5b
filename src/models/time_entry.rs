use super::break_interval::BreakInterval;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One contiguous clock-in/clock-out session.
///
/// `date` is the day the session is booked on. It is set by whoever records the
/// session and is never recomputed from `clock_in`, so an overnight session
/// stays on the day it started (or whichever day the user picked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub date: NaiveDate,
    pub clock_in: DateTime<Utc>,
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>, // None ⇔ session still running
    #[serde(default)]
    pub break_minutes: i64,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breaks: Vec<BreakInterval>,
}

impl TimeEntry {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        clock_in: DateTime<Utc>,
        clock_out: Option<DateTime<Utc>>,
        break_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            clock_in,
            clock_out,
            break_minutes,
            task: None,
            breaks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// End of the session: the clock-out, or `now` while it is still open.
    pub fn end_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.clock_out.unwrap_or(now)
    }

    /// Net worked minutes (elapsed minus breaks), never negative.
    /// Negative break minutes count as no break.
    pub fn net_minutes(&self, now: DateTime<Utc>) -> i64 {
        let raw = (self.end_or(now) - self.clock_in).num_minutes();
        raw.saturating_sub(self.break_minutes.max(0)).max(0)
    }
}
