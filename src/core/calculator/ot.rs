use chrono::{DateTime, Local};

/// Overtime hours between OT start and end, billed only in complete
/// half-hour units, rounded down: 49 minutes is 0.5 h, not 1 h.
///
/// No upper bound is enforced here; shift-length caps are policy, not
/// arithmetic.
pub fn compute_ot_hours(ot_start: DateTime<Local>, ot_end: DateTime<Local>) -> f64 {
    let minutes = (ot_end - ot_start).num_minutes();
    if minutes <= 0 {
        return 0.0;
    }
    (minutes / 30) as f64 * 0.5
}
