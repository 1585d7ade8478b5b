/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Shortfall color: red when something is missing, grey otherwise.
pub fn color_for_shortfall(value: i64) -> &'static str {
    if value > 0 { RED } else { GREY }
}

/// Worked-vs-target color:
/// \>= target → green
/// \> 0 → reset
/// 0 → grey
pub fn color_for_worked(worked: i64, target: i64) -> &'static str {
    if worked == 0 {
        GREY
    } else if worked >= target {
        GREEN
    } else {
        RESET
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
