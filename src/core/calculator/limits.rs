use crate::models::work_config::WorkTimeConfig;

/// Effective cap for today: base + grace + granted overwork.
pub fn applied_limit_minutes(cfg: &WorkTimeConfig) -> i64 {
    cfg.base_minutes()
        .saturating_add(cfg.grace())
        .saturating_add(cfg.granted_overwork())
}

pub fn remaining_minutes(applied_limit: i64, worked: i64) -> i64 {
    (applied_limit - worked).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_adds_grace_and_granted_overwork() {
        let cfg = WorkTimeConfig::new(9.0, 10, 60, 30);
        assert_eq!(applied_limit_minutes(&cfg), 580);
    }

    #[test]
    fn overwork_request_above_allowance_is_capped() {
        let cfg = WorkTimeConfig::new(8.0, 15, 60, 500);
        assert_eq!(applied_limit_minutes(&cfg), 480 + 15 + 60);
    }

    #[test]
    fn negative_request_grants_nothing() {
        let cfg = WorkTimeConfig::new(8.0, 0, 60, -30);
        assert_eq!(applied_limit_minutes(&cfg), 480);
    }

    #[test]
    fn limit_never_exceeds_full_ceiling() {
        for office in [0.0, 4.5, 7.5, 9.0] {
            for grace in [0, 5, 30] {
                for allow in [0, 30, 120] {
                    for requested in [-10, 0, 15, 120, 1000] {
                        let cfg = WorkTimeConfig::new(office, grace, allow, requested);
                        let ceiling = (office * 60.0) as i64 + grace + allow;
                        assert!(applied_limit_minutes(&cfg) <= ceiling);
                    }
                }
            }
        }
    }

    #[test]
    fn fractional_office_hours_round_to_minutes() {
        let cfg = WorkTimeConfig::new(7.5, 0, 0, 0);
        assert_eq!(applied_limit_minutes(&cfg), 450);
    }

    #[test]
    fn huge_settings_saturate_instead_of_overflowing() {
        let cfg = WorkTimeConfig::new(1e300, 10, 0, 0);
        assert_eq!(applied_limit_minutes(&cfg), i64::MAX);

        let cfg = WorkTimeConfig::new(9.0, i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(applied_limit_minutes(&cfg), i64::MAX);
    }

    #[test]
    fn remaining_is_never_negative() {
        assert_eq!(remaining_minutes(540, 500), 40);
        assert_eq!(remaining_minutes(540, 600), 0);
    }
}
