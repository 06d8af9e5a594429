use serde::{Deserialize, Serialize};
use std::fmt;

use super::event_kind::EventKind;
use super::timeline::TimelineEvent;

/// Position in the attendance lifecycle.
///
/// `Loading` is the transient value of a machine handle before the day
/// record has been fetched; it is never derived from a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Loading,
    Idle,
    Working,
    Completed,
    OtWorking,
    OtCompleted,
}

impl WorkStatus {
    /// Derive the current status from the tag of the last event only.
    ///
    /// This intentionally does NOT replay the whole sequence: an illegal
    /// history still yields a deterministic status. Full-path checking
    /// lives in `timeline::validate_timeline` and only flags problems.
    pub fn from_timeline(timeline: &[TimelineEvent]) -> Self {
        match timeline.last().map(|ev| ev.event) {
            None => WorkStatus::Idle,
            Some(EventKind::ArriveFactory) | Some(EventKind::ArriveSite) => WorkStatus::Working,
            Some(EventKind::Checkout) => WorkStatus::Completed,
            Some(EventKind::OtStart) => WorkStatus::OtWorking,
            Some(EventKind::OtEnd) => WorkStatus::OtCompleted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Loading => "loading",
            WorkStatus::Idle => "idle",
            WorkStatus::Working => "working",
            WorkStatus::Completed => "completed",
            WorkStatus::OtWorking => "ot_working",
            WorkStatus::OtCompleted => "ot_completed",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
