use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::event_kind::EventKind;
use super::work_type::WorkType;

/// One entry of the per-day attendance timeline. Immutable once appended;
/// the JSON serialization of a `Vec<TimelineEvent>` is what lands in the
/// `day_records.timeline` column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub event: EventKind,
    pub timestamp: DateTime<Local>,
    /// Only set on arrival events: the mode chosen at check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<WorkType>,
}

impl TimelineEvent {
    pub fn new(event: EventKind, timestamp: DateTime<Local>) -> Self {
        Self {
            event,
            timestamp,
            work_type: None,
        }
    }

    pub fn arrival(work_type: WorkType, timestamp: DateTime<Local>) -> Self {
        let event = match work_type {
            WorkType::InFactory => EventKind::ArriveFactory,
            WorkType::OnSite => EventKind::ArriveSite,
        };
        Self {
            event,
            timestamp,
            work_type: Some(work_type),
        }
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Replay the whole sequence against the transition table and check that
/// timestamps never go backwards.
///
/// Used at read time to *flag* suspicious histories (manual fixes, racing
/// writers). It never rejects an operation and never reorders anything:
/// status derivation stays last-event-only.
pub fn validate_timeline(timeline: &[TimelineEvent]) -> Result<(), String> {
    let mut prev: Option<&TimelineEvent> = None;

    for (i, ev) in timeline.iter().enumerate() {
        if let Some(p) = prev {
            if ev.timestamp < p.timestamp {
                return Err(format!(
                    "event {} ({}) is earlier than the previous event ({} < {})",
                    i + 1,
                    ev.event.to_db_str(),
                    ev.time_str(),
                    p.time_str()
                ));
            }
        }

        let legal = match prev.map(|p| p.event) {
            // first event of the day must be an arrival
            None => ev.event.is_arrival(),
            Some(k) if k.is_arrival() => ev.event == EventKind::Checkout,
            Some(EventKind::Checkout) => ev.event == EventKind::OtStart,
            Some(EventKind::OtStart) => ev.event == EventKind::OtEnd,
            Some(EventKind::OtEnd) => false,
            Some(_) => false,
        };

        if !legal {
            return Err(format!(
                "illegal event sequence at position {}: '{}' after '{}'",
                i + 1,
                ev.event.to_db_str(),
                prev.map(|p| p.event.to_db_str()).unwrap_or("(start)")
            ));
        }

        prev = Some(ev);
    }

    Ok(())
}
