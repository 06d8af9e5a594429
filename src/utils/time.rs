//! Time utilities: parsing HH:MM, assembling local instants, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Build a local instant from a date and a wall time.
///
/// A wall time inside a DST spring-forward gap never occurs; it settles
/// on the same wall time one hour later, the first representable instant
/// after the jump. Ambiguous fall-back times take the earlier offset.
pub fn local_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = date.and_time(time);
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(first, _) => first,
        LocalResult::None => (naive + Duration::hours(1))
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or_else(Local::now),
    }
}

/// "HH:MM" rendering used across the status panel and list rows.
pub fn hhmm(ts: DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}
