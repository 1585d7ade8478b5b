use serde::{Deserialize, Serialize};
use std::fmt;

/// Band the day's worked minutes fall into. Recomputed on every call, there
/// is no transition memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStatus {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "hardCap")]
    HardCap,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Normal => "normal",
            WorkStatus::Warning => "warning",
            WorkStatus::HardCap => "hardCap",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
