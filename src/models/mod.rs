pub mod break_interval;
pub mod daily_stats;
pub mod time_entry;
pub mod week_summary;
pub mod work_config;
pub mod work_status;
