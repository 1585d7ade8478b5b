use crate::models::work_status::WorkStatus;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_STOP: &str = "⛔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Section header, e.g. `==== Today (2025-03-10)`
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}==== {}{}", FG_BLUE, BOLD, msg, RESET);
}

/// One-line nudge matching the day's status band.
pub fn status_banner(status: WorkStatus, remaining: i64) {
    match status {
        WorkStatus::Normal => success(format!("On track, {remaining} min left before the cap.")),
        WorkStatus::Warning => warning(format!(
            "Working on borrowed time: {remaining} min left before the hard cap."
        )),
        WorkStatus::HardCap => println!(
            "{}{}{} {}Hard cap reached. Clock out or request overwork.",
            FG_RED, BOLD, ICON_STOP, RESET
        ),
    }
}
