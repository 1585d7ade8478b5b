use crate::models::work_config::WorkTimeConfig;
use crate::models::work_status::WorkStatus;

/// Three-way band classification, checked from the highest tier down.
///
/// - `HardCap`: the fully authorized ceiling is reached.
/// - `Warning`: within `warning_lead_minutes` of the base allowance, or past
///   it and living on grace/overwork.
/// - `Normal`: anything below.
pub fn classify(worked: i64, applied_limit: i64, cfg: &WorkTimeConfig) -> WorkStatus {
    if worked >= applied_limit {
        return WorkStatus::HardCap;
    }

    let warning_from = cfg.base_minutes() - cfg.warning_lead_minutes.max(0);
    if worked >= warning_from {
        return WorkStatus::Warning;
    }

    WorkStatus::Normal
}
