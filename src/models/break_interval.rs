use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single break taken inside a session. Only its length matters to the
/// calculator, which works on the summed `break_minutes` of the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl BreakInterval {
    /// Minutes spent on this break; an open break runs until `fallback_end`.
    pub fn minutes(&self, fallback_end: DateTime<Utc>) -> i64 {
        let end = self.end.unwrap_or(fallback_end);
        (end - self.start).num_minutes().max(0)
    }
}

/// Sum of all break intervals, each clamped at zero.
pub fn total_break_minutes(breaks: &[BreakInterval], fallback_end: DateTime<Utc>) -> i64 {
    breaks.iter().map(|b| b.minutes(fallback_end)).sum()
}
