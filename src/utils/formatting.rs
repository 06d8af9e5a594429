//! Formatting helpers for CLI output.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// "7.5" stored hours rendered as "7.50 h"; None as "-".
pub fn fmt_hours(h: Option<f64>) -> String {
    match h {
        Some(v) => format!("{:.2} h", v),
        None => "-".to_string(),
    }
}

/// Textual label and ANSI color for a work status code.
pub fn describe_status(code: &str) -> (String, &'static str) {
    match code {
        "idle" => ("Idle".into(), "\x1b[37m"),
        "working" => ("Working".into(), "\x1b[32m"),
        "completed" => ("Completed".into(), "\x1b[34m"),
        "ot_working" => ("Overtime".into(), "\x1b[33m"),
        "ot_completed" => ("Overtime done".into(), "\x1b[35m"),
        "loading" => ("Loading".into(), "\x1b[90m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
