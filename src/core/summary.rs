use crate::core::calculator::ShiftWindow;
use crate::core::calculator::normal::compute_normal_hours;
use crate::core::calculator::ot::compute_ot_hours;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::DaySummary;
use crate::models::event_kind::EventKind;
use crate::models::timeline::validate_timeline;

pub struct Core;

impl Core {
    /// Derive the display summary for a day, always from the timeline.
    ///
    /// The persisted `ot_hours` cache is only used when the timeline has
    /// no usable ot_start/ot_end pair (e.g. a manually repaired row).
    pub fn build_daily_summary(record: &DayRecord, win: &ShiftWindow) -> DaySummary {
        let status = record.status();
        let timeline_warning = validate_timeline(&record.timeline).err();

        let normal_hours = match record.last_check_out {
            Some(out) => compute_normal_hours(record.first_check_in, out, win),
            None => 0.0,
        };

        let ot_start = record.last_event_of(EventKind::OtStart);
        let ot_end = record.last_event_of(EventKind::OtEnd);
        let ot_hours = match (ot_start, ot_end) {
            (Some(s), Some(e)) if e.timestamp >= s.timestamp => {
                compute_ot_hours(s.timestamp, e.timestamp)
            }
            _ => record.ot_hours.unwrap_or(0.0),
        };

        DaySummary {
            status,
            work_type: record.work_type,
            first_check_in: record.first_check_in,
            last_check_out: record.last_check_out,
            normal_hours,
            ot_hours,
            timeline_warning,
        }
    }
}
