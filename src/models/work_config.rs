use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OFFICE_HOURS: f64 = 9.0;
pub const DEFAULT_WARNING_LEAD_MINUTES: i64 = 60;

/// Per-user daily policy: base allowance, grace band and overwork grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTimeConfig {
    pub office_hours: f64,
    #[serde(default)]
    pub grace_minutes: i64,
    #[serde(default)]
    pub allow_overwork_minutes: i64,
    #[serde(default)]
    pub overwork_minutes_requested: i64,
    #[serde(default = "default_warning_lead")]
    pub warning_lead_minutes: i64,
    #[serde(default = "default_count_weekends")]
    pub count_weekends: bool,
}

fn default_warning_lead() -> i64 {
    DEFAULT_WARNING_LEAD_MINUTES
}
fn default_count_weekends() -> bool {
    true
}

impl Default for WorkTimeConfig {
    fn default() -> Self {
        Self {
            office_hours: DEFAULT_OFFICE_HOURS,
            grace_minutes: 0,
            allow_overwork_minutes: 0,
            overwork_minutes_requested: 0,
            warning_lead_minutes: default_warning_lead(),
            count_weekends: default_count_weekends(),
        }
    }
}

impl WorkTimeConfig {
    pub fn new(
        office_hours: f64,
        grace_minutes: i64,
        allow_overwork_minutes: i64,
        overwork_minutes_requested: i64,
    ) -> Self {
        Self {
            office_hours,
            grace_minutes,
            allow_overwork_minutes,
            overwork_minutes_requested,
            ..Self::default()
        }
    }

    /// Base allowance in minutes. Negative or non-finite hours count as zero.
    pub fn base_minutes(&self) -> i64 {
        if !self.office_hours.is_finite() || self.office_hours <= 0.0 {
            return 0;
        }
        (self.office_hours * 60.0).round() as i64
    }

    pub fn grace(&self) -> i64 {
        self.grace_minutes.max(0)
    }

    /// Overwork actually granted today: the request clamped into
    /// `0..=allow_overwork_minutes`.
    pub fn granted_overwork(&self) -> i64 {
        let ceiling = self.allow_overwork_minutes.max(0);
        self.overwork_minutes_requested.clamp(0, ceiling)
    }

    /// Reject settings that make no sense as policy. Callers run this before
    /// handing the config to the calculator, which itself only clamps.
    pub fn validate(&self) -> AppResult<()> {
        if !self.office_hours.is_finite() || self.office_hours < 0.0 {
            return Err(AppError::InvalidConfiguration(format!(
                "office_hours must be a non-negative number (got {})",
                self.office_hours
            )));
        }
        if self.office_hours > 24.0 {
            return Err(AppError::InvalidConfiguration(format!(
                "office_hours cannot exceed 24 (got {})",
                self.office_hours
            )));
        }

        let minute_fields = [
            ("grace_minutes", self.grace_minutes),
            ("allow_overwork_minutes", self.allow_overwork_minutes),
            ("overwork_minutes_requested", self.overwork_minutes_requested),
            ("warning_lead_minutes", self.warning_lead_minutes),
        ];
        for (name, value) in minute_fields {
            if value < 0 {
                return Err(AppError::InvalidConfiguration(format!(
                    "{name} must not be negative (got {value})"
                )));
            }
        }

        Ok(())
    }
}
