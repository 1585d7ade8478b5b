// src/export/model.rs

use crate::models::week_summary::DayTotal;
use crate::utils::date::weekday_short;
use serde::Serialize;

/// Flat per-day row of the weekly report.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub worked_minutes: i64,
    pub target_minutes: i64,
    pub shortfall_minutes: i64,
    pub surplus_minutes: i64,
}

impl From<&DayTotal> for DayExport {
    fn from(d: &DayTotal) -> Self {
        Self {
            date: d.date.format("%Y-%m-%d").to_string(),
            weekday: weekday_short(&d.date).to_string(),
            worked_minutes: d.worked_minutes,
            target_minutes: d.target_minutes,
            shortfall_minutes: d.shortfall_minutes,
            surplus_minutes: d.surplus_minutes(),
        }
    }
}
