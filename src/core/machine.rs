//! The attendance state machine: four transitions over the persisted
//! per-day event timeline.
//!
//! Every operation appends exactly one event with exactly one persistence
//! write, checks its precondition against the status derived from the
//! last stored event, and only advances the in-memory state after the
//! write succeeds. A failed write leaves the caller in the prior state,
//! free to retry.

use chrono::{DateTime, Local, NaiveDate};

use crate::core::calculator::ot::compute_ot_hours;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{append_event, create_record, get_day_record};
use crate::errors::{AppError, AppResult};
use crate::geo::GeofenceValidator;
use crate::models::day_record::DayRecord;
use crate::models::event_kind::EventKind;
use crate::models::timeline::TimelineEvent;
use crate::models::work_status::WorkStatus;
use crate::models::work_type::WorkType;
use crate::ui::messages::warning;
use crate::utils::time::hhmm;

/// Handle on one (user, date) attendance row.
pub struct Attendance<'a> {
    pool: &'a mut DbPool,
    user: String,
    date: NaiveDate,
    status: WorkStatus,
}

impl<'a> Attendance<'a> {
    pub fn new(pool: &'a mut DbPool, user: &str, date: NaiveDate) -> Self {
        Self {
            pool,
            user: user.to_string(),
            date,
            // pre-fetch value, replaced by the first load()
            status: WorkStatus::Loading,
        }
    }

    /// Fetch the day record and derive the current status from it
    /// (`idle` when no record exists yet).
    pub fn load(&mut self) -> AppResult<Option<DayRecord>> {
        let record = get_day_record(self.pool, &self.user, &self.date)?;
        self.status = match &record {
            Some(r) => r.status(),
            None => WorkStatus::Idle,
        };
        Ok(record)
    }

    pub fn status(&self) -> WorkStatus {
        self.status
    }

    /// First transition of the day: `idle → working`.
    ///
    /// Factory check-in is gated by the geofence; on-site work bypasses
    /// it entirely (no fixed reference point).
    pub fn check_in(
        &mut self,
        work_type: WorkType,
        now: DateTime<Local>,
        geofence: &GeofenceValidator,
    ) -> AppResult<DayRecord> {
        let existing = self.load()?;
        self.require(WorkStatus::Idle, "check in", "idle")?;

        if work_type.is_factory() {
            geofence.ensure_in_range()?;
        }

        let event = TimelineEvent::arrival(work_type, now);

        let record = match existing {
            None => {
                let fresh = DayRecord::first_of_day(&self.user, self.date, work_type, event);
                create_record(&self.pool.conn, &fresh)?
            }
            // re-entry: a record already exists for today, append the
            // arrival without touching first_check_in
            Some(mut rec) => {
                append_event(&self.pool.conn, &self.user, &self.date, &event, None, None)?;
                rec.timeline.push(event);
                rec
            }
        };

        self.status = record.status();
        self.audit("check_in", &format!("{} at {}", work_type.to_db_str(), hhmm(now)));
        Ok(record)
    }

    /// `working → completed`. Same geofence gate as check-in when the
    /// day's work type is factory.
    pub fn check_out(
        &mut self,
        now: DateTime<Local>,
        geofence: &GeofenceValidator,
    ) -> AppResult<DayRecord> {
        let mut record = self.loaded_record()?;
        self.require(WorkStatus::Working, "check out", "working")?;

        if record.work_type.is_factory() {
            geofence.ensure_in_range()?;
        }

        let event = TimelineEvent::new(EventKind::Checkout, now);
        append_event(
            &self.pool.conn,
            &self.user,
            &self.date,
            &event,
            Some(now),
            None,
        )?;

        record.timeline.push(event);
        record.last_check_out = Some(now);
        self.status = record.status();
        self.audit("check_out", &hhmm(now));
        Ok(record)
    }

    /// `completed → ot_working`. OT start is not location-gated.
    pub fn start_ot(&mut self, now: DateTime<Local>) -> AppResult<DayRecord> {
        let mut record = self.loaded_record()?;
        self.require(WorkStatus::Completed, "start overtime", "completed")?;

        let event = TimelineEvent::new(EventKind::OtStart, now);
        append_event(&self.pool.conn, &self.user, &self.date, &event, None, None)?;

        record.timeline.push(event);
        self.status = record.status();
        self.audit("ot_start", &hhmm(now));
        Ok(record)
    }

    /// `ot_working → ot_completed`. Computes the billable OT (half-hour
    /// units, rounded down) and caches it on the record in the same
    /// write as the appended event.
    pub fn end_ot(&mut self, now: DateTime<Local>) -> AppResult<(DayRecord, f64)> {
        let mut record = self.loaded_record()?;
        self.require(WorkStatus::OtWorking, "end overtime", "ot_working")?;

        let ot_start = record
            .last_event_of(EventKind::OtStart)
            .map(|ev| ev.timestamp)
            .ok_or_else(|| {
                AppError::Timeline("status is ot_working but no ot_start event found".to_string())
            })?;

        let ot_hours = compute_ot_hours(ot_start, now);

        let event = TimelineEvent::new(EventKind::OtEnd, now);
        append_event(
            &self.pool.conn,
            &self.user,
            &self.date,
            &event,
            None,
            Some(ot_hours),
        )?;

        record.timeline.push(event);
        record.ot_hours = Some(ot_hours);
        self.status = record.status();
        self.audit("ot_end", &format!("{} ({:.1} h)", hhmm(now), ot_hours));
        Ok((record, ot_hours))
    }

    // ------------------------------------------------------------------

    fn loaded_record(&mut self) -> AppResult<DayRecord> {
        self.load()?
            .ok_or_else(|| AppError::NoRecord(self.date.format("%Y-%m-%d").to_string()))
    }

    fn require(
        &self,
        expected: WorkStatus,
        action: &'static str,
        expected_str: &'static str,
    ) -> AppResult<()> {
        if self.status != expected {
            return Err(AppError::WrongState {
                action,
                expected: expected_str,
                actual: self.status.to_string(),
            });
        }
        Ok(())
    }

    /// Audit trail; never fatal.
    fn audit(&self, operation: &str, message: &str) {
        let target = format!("{} {}", self.user, self.date.format("%Y-%m-%d"));
        if let Err(e) = ttlog(&self.pool.conn, operation, &target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
