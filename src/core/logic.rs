use crate::core::calculator::{duration, limits, status, weekly};
use crate::models::daily_stats::DailyWorkStats;
use crate::models::time_entry::TimeEntry;
use crate::models::week_summary::WeekSummary;
use crate::models::work_config::WorkTimeConfig;
use chrono::{DateTime, Utc};

/// Entry point of the work-time engine.
///
/// Every operation is a pure function of `(entries, cfg, now)`: entries are
/// not pre-filtered, and `now` decides both which day is "today" and how long
/// open sessions have been running.
pub struct Core;

impl Core {
    pub fn compute_daily_stats(
        entries: &[TimeEntry],
        cfg: &WorkTimeConfig,
        now: DateTime<Utc>,
    ) -> DailyWorkStats {
        let today = duration::today_of(now);
        let today_minutes = duration::minutes_for_date(entries, today, now);

        let applied_limit = limits::applied_limit_minutes(cfg);
        let remaining = limits::remaining_minutes(applied_limit, today_minutes);
        let status = status::classify(today_minutes, applied_limit, cfg);

        log::debug!(
            "daily stats for {today}: worked={today_minutes} limit={applied_limit} status={status}"
        );

        DailyWorkStats {
            today_minutes,
            applied_limit_minutes: applied_limit,
            remaining_minutes: remaining,
            status,
            weekly_catch_up_minutes: Self::compute_weekly_catch_up(entries, cfg, now),
        }
    }

    pub fn compute_weekly_catch_up(
        entries: &[TimeEntry],
        cfg: &WorkTimeConfig,
        now: DateTime<Utc>,
    ) -> i64 {
        weekly::build_week_summary(entries, cfg, now).catch_up_minutes
    }

    pub fn week_summary(
        entries: &[TimeEntry],
        cfg: &WorkTimeConfig,
        now: DateTime<Utc>,
    ) -> WeekSummary {
        weekly::build_week_summary(entries, cfg, now)
    }
}
