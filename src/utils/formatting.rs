//! Formatting utilities used for CLI and export outputs.

use crate::models::work_status::WorkStatus;
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Label and ANSI colour for a status band.
pub fn describe_status(status: WorkStatus) -> (&'static str, &'static str) {
    match status {
        WorkStatus::Normal => ("Normal", GREEN),
        WorkStatus::Warning => ("Warning: past the safe zone", YELLOW),
        WorkStatus::HardCap => ("Hard cap reached: stop working", RED),
    }
}

pub fn colored_status(status: WorkStatus) -> String {
    let (label, color) = describe_status(status);
    format!("{color}{label}{RESET}")
}
