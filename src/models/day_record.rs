use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use super::event_kind::EventKind;
use super::timeline::TimelineEvent;
use super::work_status::WorkStatus;
use super::work_type::WorkType;

/// One attendance row per (user, calendar date).
///
/// `timeline` is the single source of truth: status is always derived
/// from it, and `ot_hours` is only a cached value persisted when OT ends.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub id: i64,
    pub user: String,
    pub log_date: NaiveDate,         // ⇔ day_records.log_date (TEXT "YYYY-MM-DD")
    pub work_type: WorkType,         // ⇔ day_records.work_type
    pub first_check_in: DateTime<Local>, // set exactly once, never overwritten
    pub last_check_out: Option<DateTime<Local>>, // overwritten on repeated checkout
    pub timeline: Vec<TimelineEvent>, // ⇔ day_records.timeline (TEXT, JSON array)
    pub ot_hours: Option<f64>,       // cached, recomputed at ot_end
    pub created_at: String,          // ⇔ day_records.created_at (TEXT, ISO8601)
}

impl DayRecord {
    /// Constructor for the first check-in of a day.
    pub fn first_of_day(
        user: &str,
        log_date: NaiveDate,
        work_type: WorkType,
        first_event: TimelineEvent,
    ) -> Self {
        let first_check_in = first_event.timestamp;
        Self {
            id: 0,
            user: user.to_string(),
            log_date,
            work_type,
            first_check_in,
            last_check_out: None,
            timeline: vec![first_event],
            ot_hours: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn status(&self) -> WorkStatus {
        WorkStatus::from_timeline(&self.timeline)
    }

    pub fn date_str(&self) -> String {
        self.log_date.format("%Y-%m-%d").to_string()
    }

    /// Last event with the given tag, if any.
    pub fn last_event_of(&self, kind: EventKind) -> Option<&TimelineEvent> {
        self.timeline.iter().rev().find(|ev| ev.event == kind)
    }
}
