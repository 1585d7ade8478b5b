use crate::errors::{AppError, AppResult};
use crate::models::work_config::{
    DEFAULT_OFFICE_HOURS, DEFAULT_WARNING_LEAD_MINUTES, WorkTimeConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

/// On-disk YAML configuration of the `companion` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_entries_file")]
    pub entries_file: String,
    #[serde(default = "default_office_hours")]
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
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_entries_file() -> String {
    Config::entries_file().to_string_lossy().to_string()
}
fn default_office_hours() -> f64 {
    DEFAULT_OFFICE_HOURS
}
fn default_warning_lead() -> i64 {
    DEFAULT_WARNING_LEAD_MINUTES
}
fn default_count_weekends() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries_file: default_entries_file(),
            office_hours: default_office_hours(),
            grace_minutes: 0,
            allow_overwork_minutes: 0,
            overwork_minutes_requested: 0,
            warning_lead_minutes: default_warning_lead(),
            count_weekends: default_count_weekends(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.companion`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".companion")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("companion.conf")
    }

    /// Default location of the exported time entries
    pub fn entries_file() -> PathBuf {
        Self::config_dir().join("entries.json")
    }

    /// Load configuration from `path`, or return defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::info!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write a fresh config file. Refuses to overwrite an existing one.
    pub fn init_at(path: &Path, entries_file: Option<String>) -> AppResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut config = Config::default();
        if let Some(file) = entries_file {
            config.entries_file = file;
        }

        if path.exists() {
            log::warn!("config file {} already exists, left untouched", path.display());
            return Self::load_from(path);
        }

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }

    /// Policy part of the config, as consumed by the calculator.
    pub fn work_time(&self) -> WorkTimeConfig {
        WorkTimeConfig {
            office_hours: self.office_hours,
            grace_minutes: self.grace_minutes,
            allow_overwork_minutes: self.allow_overwork_minutes,
            overwork_minutes_requested: self.overwork_minutes_requested,
            warning_lead_minutes: self.warning_lead_minutes,
            count_weekends: self.count_weekends,
        }
    }
}
