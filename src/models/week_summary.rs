use chrono::NaiveDate;
use serde::Serialize;

/// Worked vs. target minutes for one day of the current week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub target_minutes: i64,
    pub shortfall_minutes: i64,
}

impl DayTotal {
    /// Minutes worked above target; never feeds back into the catch-up.
    pub fn surplus_minutes(&self) -> i64 {
        (self.worked_minutes - self.target_minutes).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub days: Vec<DayTotal>, // Monday ..= today
    pub catch_up_minutes: i64,
}

impl WeekSummary {
    pub fn worked_minutes(&self) -> i64 {
        self.days
            .iter()
            .map(|d| d.worked_minutes)
            .fold(0, i64::saturating_add)
    }

    pub fn target_minutes(&self) -> i64 {
        self.days
            .iter()
            .map(|d| d.target_minutes)
            .fold(0, i64::saturating_add)
    }
}
