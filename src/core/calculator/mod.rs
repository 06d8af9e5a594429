//! Pure time arithmetic: everything here takes explicit timestamps and
//! returns numbers or strings, with no clock or database access.

pub mod elapsed;
pub mod normal;
pub mod ot;

use chrono::NaiveTime;

/// Official paid window of a work day: shift boundaries plus the
/// unconditionally unpaid break.
#[derive(Debug, Clone, Copy)]
pub struct ShiftWindow {
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub break_start: NaiveTime,
    pub break_end: NaiveTime,
}

impl Default for ShiftWindow {
    fn default() -> Self {
        Self {
            shift_start: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            shift_end: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            break_start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            break_end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        }
    }
}
