/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const BOLD: &str = "\x1b[1m";

/// Empty values are shown as a grey `--`.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

pub fn color_for_completion(complete: bool) -> &'static str {
    if complete { GREEN } else { YELLOW }
}

/// Colour of an audit log operation.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "save" => GREEN,
        "load" => CYAN,
        "new" => BLUE,
        "export" | "send" => MAGENTA,
        "send_failed" => RED,
        "migration_applied" => YELLOW,
        _ => RESET,
    }
}
