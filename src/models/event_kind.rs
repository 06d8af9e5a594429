use serde::{Deserialize, Serialize};

/// Tag of a timeline entry. The day's status is derived from the tag of
/// the **last** event only (see `WorkStatus::from_timeline`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ArriveFactory,
    ArriveSite,
    Checkout,
    OtStart,
    OtEnd,
}

impl EventKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::ArriveFactory => "arrive_factory",
            EventKind::ArriveSite => "arrive_site",
            EventKind::Checkout => "checkout",
            EventKind::OtStart => "ot_start",
            EventKind::OtEnd => "ot_end",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "arrive_factory" => Some(EventKind::ArriveFactory),
            "arrive_site" => Some(EventKind::ArriveSite),
            "checkout" => Some(EventKind::Checkout),
            "ot_start" => Some(EventKind::OtStart),
            "ot_end" => Some(EventKind::OtEnd),
            _ => None,
        }
    }

    pub fn is_arrival(&self) -> bool {
        matches!(self, EventKind::ArriveFactory | EventKind::ArriveSite)
    }
}
