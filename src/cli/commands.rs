pub mod config;
pub mod export;
pub mod init;
pub mod status;
pub mod week;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::models::work_config::WorkTimeConfig;
use crate::sources::load_entries;
use crate::utils::path::expand_tilde;
use crate::utils::time::resolve_now;
use chrono::{DateTime, Utc};

/// Inputs every reporting command needs, loaded and validated.
pub struct Workload {
    pub entries: Vec<TimeEntry>,
    pub policy: WorkTimeConfig,
    pub now: DateTime<Utc>,
}

impl Workload {
    pub fn prepare(cli: &Cli, cfg: &Config) -> AppResult<Self> {
        let now = resolve_now(cli.now.as_ref())?;

        let policy = cfg.work_time();
        policy.validate()?;

        let entries = load_entries(&expand_tilde(&cfg.entries_file), now)?;

        Ok(Self {
            entries,
            policy,
            now,
        })
    }
}
