/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Attendance cell: green once checked in, grey while empty.
pub fn colorize_attendance(value: &str, present_marker: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        format!("{GREY}--{RESET}")
    } else if v == present_marker.trim() {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}

/// Absent members in red; nobody absent is shown greyed out.
pub fn colorize_absent(value: &str, absent_none: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == absent_none.trim() {
        let shown = if v.is_empty() { "--" } else { value };
        format!("{GREY}{shown}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
