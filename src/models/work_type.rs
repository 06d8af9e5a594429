use serde::{Deserialize, Serialize};

/// How the day is worked. Chosen once per day, fixed after the first
/// check-in. Factory work is geofenced; on-site work has no fixed
/// reference point and bypasses the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    InFactory,
    OnSite,
}

impl WorkType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkType::InFactory => "in_factory",
            WorkType::OnSite => "on_site",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in_factory" => Some(WorkType::InFactory),
            "on_site" => Some(WorkType::OnSite),
            _ => None,
        }
    }

    /// Helper: convert input code from the CLI (accepts short aliases)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "factory" | "in_factory" | "f" => Some(WorkType::InFactory),
            "site" | "on_site" | "s" => Some(WorkType::OnSite),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::InFactory => "Factory",
            WorkType::OnSite => "On-site",
        }
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, WorkType::InFactory)
    }
}
