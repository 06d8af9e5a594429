use chrono::{DateTime, Local};

use super::ShiftWindow;
use crate::utils::time::local_instant;

/// Paid normal hours for a day: the check-in/check-out interval clamped
/// to the shift window, minus its overlap with the break window.
///
/// Workers are only paid inside the official shift; arriving early or
/// leaving late earns nothing here (that is what OT is for), and the
/// break is deducted whether or not the worker actually took it.
pub fn compute_normal_hours(
    check_in: DateTime<Local>,
    check_out: DateTime<Local>,
    win: &ShiftWindow,
) -> f64 {
    let date = check_in.date_naive();

    // shift and break boundaries pinned to the check-in date;
    // local_instant settles DST-gap and ambiguous wall times
    let shift_start = local_instant(date, win.shift_start);
    let shift_end = local_instant(date, win.shift_end);
    let break_start = local_instant(date, win.break_start);
    let break_end = local_instant(date, win.break_end);

    let start = check_in.max(shift_start);
    let end = check_out.min(shift_end);

    if end <= start {
        return 0.0;
    }

    let worked_ms = (end - start).num_milliseconds();

    // overlap of [start, end] with the break window
    let ov_start = start.max(break_start);
    let ov_end = end.min(break_end);
    let break_ms = (ov_end - ov_start).num_milliseconds().max(0);

    let hours = (worked_ms - break_ms) as f64 / 3_600_000.0;
    round2(hours.max(0.0))
}

fn round2(h: f64) -> f64 {
    (h * 100.0).round() / 100.0
}
