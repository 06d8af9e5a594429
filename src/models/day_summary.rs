use chrono::{DateTime, Local};

use super::work_status::WorkStatus;
use super::work_type::WorkType;

/// Derived, never-persisted view of a day: recomputed on demand from the
/// record's timeline.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub status: WorkStatus,
    pub work_type: WorkType,
    pub first_check_in: DateTime<Local>,
    pub last_check_out: Option<DateTime<Local>>,
    pub normal_hours: f64,
    pub ot_hours: f64,
    /// Set when the stored timeline fails full-path validation.
    pub timeline_warning: Option<String>,
}
