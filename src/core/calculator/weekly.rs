//! Weekly catch-up: the sum of daily shortfalls from Monday up to today.

use crate::core::calculator::duration::{minutes_for_date, today_of};
use crate::models::time_entry::TimeEntry;
use crate::models::week_summary::{DayTotal, WeekSummary};
use crate::models::work_config::WorkTimeConfig;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

/// Monday of the week `day` belongs to.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn target_for(day: NaiveDate, cfg: &WorkTimeConfig) -> i64 {
    if !cfg.count_weekends && is_weekend(day) {
        0
    } else {
        cfg.base_minutes()
    }
}

/// Per-day totals for Monday ..= today. Days after today are not listed.
pub fn build_week_summary(
    entries: &[TimeEntry],
    cfg: &WorkTimeConfig,
    now: DateTime<Utc>,
) -> WeekSummary {
    let today = today_of(now);
    let monday = week_start(today);

    let days: Vec<DayTotal> = monday
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|date| {
            let worked = minutes_for_date(entries, date, now);
            let target = target_for(date, cfg);
            let shortfall = (target - worked).max(0);

            log::debug!("{date}: worked={worked} target={target} shortfall={shortfall}");

            DayTotal {
                date,
                worked_minutes: worked,
                target_minutes: target,
                shortfall_minutes: shortfall,
            }
        })
        .collect();

    // surplus days do not offset deficits
    let catch_up = days
        .iter()
        .map(|d| d.shortfall_minutes)
        .fold(0, i64::saturating_add);

    WeekSummary {
        week_start: monday,
        days,
        catch_up_minutes: catch_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        // March 2025: the 10th is a Monday
        Utc.with_ymd_and_hms(2025, 3, d, h, m, 0).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn entry(id: &str, d: u32, minutes: i64) -> TimeEntry {
        let start = ts(d, 8, 0);
        TimeEntry::new(id, date(d), start, Some(start + Duration::minutes(minutes)), 0)
    }

    #[test]
    fn week_starts_on_monday() {
        assert_eq!(week_start(date(10)), date(10));
        assert_eq!(week_start(date(13)), date(10));
        assert_eq!(week_start(date(16)), date(10));
    }

    #[test]
    fn single_day_shortfall_on_monday() {
        let entries = vec![entry("a", 10, 300)];
        let cfg = WorkTimeConfig::new(9.0, 0, 0, 0);
        let week = build_week_summary(&entries, &cfg, ts(10, 18, 0));
        assert_eq!(week.days.len(), 1);
        assert_eq!(week.catch_up_minutes, 240);
    }

    #[test]
    fn surplus_does_not_offset_deficit() {
        let entries = vec![entry("mon", 10, 600), entry("tue", 11, 500)];
        let cfg = WorkTimeConfig::new(9.0, 0, 0, 0);
        let week = build_week_summary(&entries, &cfg, ts(11, 20, 0));
        assert_eq!(week.catch_up_minutes, 40);
        assert_eq!(week.days[0].surplus_minutes(), 60);
    }

    #[test]
    fn days_without_entries_count_as_full_shortfall() {
        let entries = vec![entry("wed", 12, 540)];
        let cfg = WorkTimeConfig::new(8.0, 0, 0, 0);
        let week = build_week_summary(&entries, &cfg, ts(12, 18, 0));
        // Mon and Tue missing entirely, Wed above target
        assert_eq!(week.catch_up_minutes, 960);
    }

    #[test]
    fn future_days_are_ignored() {
        let entries = vec![entry("fri", 14, 10)];
        let cfg = WorkTimeConfig::new(8.0, 0, 0, 0);
        let week = build_week_summary(&entries, &cfg, ts(10, 9, 0));
        assert_eq!(week.days.len(), 1);
        assert_eq!(week.catch_up_minutes, 480);
    }

    #[test]
    fn weekends_can_be_excluded() {
        let entries: Vec<TimeEntry> = (10..=14).map(|d| entry("wd", d, 480)).collect();
        let mut cfg = WorkTimeConfig::new(8.0, 0, 0, 0);

        let sunday = ts(16, 12, 0);
        assert_eq!(build_week_summary(&entries, &cfg, sunday).catch_up_minutes, 960);

        cfg.count_weekends = false;
        let week = build_week_summary(&entries, &cfg, sunday);
        assert_eq!(week.catch_up_minutes, 0);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.target_minutes(), 5 * 480);
    }

    #[test]
    fn huge_office_hours_saturate_the_catch_up() {
        let cfg = WorkTimeConfig::new(1e300, 0, 0, 0);
        let week = build_week_summary(&[], &cfg, ts(16, 12, 0));
        assert_eq!(week.catch_up_minutes, i64::MAX);
        assert_eq!(week.target_minutes(), i64::MAX);
    }

    #[test]
    fn previous_week_entries_do_not_leak_in() {
        let entries = vec![entry("last-fri", 7, 900)];
        let cfg = WorkTimeConfig::new(8.0, 0, 0, 0);
        let week = build_week_summary(&entries, &cfg, ts(10, 12, 0));
        assert_eq!(week.worked_minutes(), 0);
    }
}
