use super::work_status::WorkStatus;
use serde::Serialize;

/// Today's figures, recomputed on demand from entries + config + now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWorkStats {
    pub today_minutes: i64,
    pub applied_limit_minutes: i64,
    pub remaining_minutes: i64,
    pub status: WorkStatus,
    pub weekly_catch_up_minutes: i64,
}
