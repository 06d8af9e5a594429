use chrono::{DateTime, Local};

/// `HH:MM:SS` elapsed time between `start` and `now`, floored to the
/// second and clamped at zero so clock skew never shows a negative
/// duration.
pub fn elapsed_display(start: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - start).num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
