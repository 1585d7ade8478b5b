#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Monday 2025-03-10, 18:00 UTC
pub const MONDAY_EVENING: &str = "2025-03-10T18:00:00Z";

pub fn companion() -> Command {
    cargo_bin_cmd!("companion")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_companion.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file with the given policy and entry file, return its path.
pub fn write_config(name: &str, entries_file: &str, policy: &str) -> String {
    let path = temp_path(name, "conf");
    let yaml = format!("entries_file: {entries_file}\n{policy}");
    fs::write(&path, yaml).expect("write config");
    path
}

pub fn write_entries(name: &str, json: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, json).expect("write entries");
    path
}

/// One closed session on `date` between two UTC times ("HH:MM").
pub fn session(id: &str, date: &str, from: &str, to: &str, break_minutes: i64) -> String {
    format!(
        r#"{{"id": "{id}", "date": "{date}", "clockIn": "{date}T{from}:00Z", "clockOut": "{date}T{to}:00Z", "breakMinutes": {break_minutes}}}"#
    )
}

pub fn entries_json(sessions: &[String]) -> String {
    format!("[{}]", sessions.join(",\n"))
}
