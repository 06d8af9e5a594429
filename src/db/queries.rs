use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::timeline::TimelineEvent;
use crate::models::work_type::WorkType;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

fn conv_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_instant(s: &str) -> std::result::Result<DateTime<Local>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Local))
        .map_err(|_| conv_err(AppError::InvalidTime(s.to_string())))
}

/// Validate one `day_records` row at the persistence boundary: every
/// loosely-typed TEXT column becomes an explicit tagged value or the row
/// is rejected.
pub fn map_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("log_date")?;
    let log_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conv_err(AppError::InvalidDate(date_str.clone())))?;

    let wt_str: String = row.get("work_type")?;
    let work_type = WorkType::from_db_str(&wt_str)
        .ok_or_else(|| conv_err(AppError::InvalidWorkType(wt_str.clone())))?;

    let first_str: String = row.get("first_check_in")?;
    let first_check_in = parse_instant(&first_str)?;

    let last_check_out = match row.get::<_, Option<String>>("last_check_out")? {
        Some(s) => Some(parse_instant(&s)?),
        None => None,
    };

    let timeline_json: String = row.get("timeline")?;
    let timeline: Vec<TimelineEvent> = serde_json::from_str(&timeline_json)
        .map_err(|e| conv_err(AppError::InvalidEvent(e.to_string())))?;

    Ok(DayRecord {
        id: row.get("id")?,
        user: row.get("user")?,
        log_date,
        work_type,
        first_check_in,
        last_check_out,
        timeline,
        ot_hours: row.get("ot_hours")?,
        created_at: row.get("created_at")?,
    })
}

/// `getTodayRecord`: the row for (user, date), if any.
pub fn get_day_record(
    pool: &mut DbPool,
    user: &str,
    date: &NaiveDate,
) -> AppResult<Option<DayRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM day_records
         WHERE user = ?1 AND log_date = ?2",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rows = stmt.query_map(params![user, date_str], map_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// `createRecord`: insert the first-check-in row and return it with its id.
pub fn create_record(conn: &Connection, record: &DayRecord) -> AppResult<DayRecord> {
    let timeline_json = serde_json::to_string(&record.timeline)
        .map_err(|e| AppError::InvalidEvent(e.to_string()))?;

    conn.execute(
        "INSERT INTO day_records (user, log_date, work_type, first_check_in, last_check_out, timeline, ot_hours, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.user,
            record.date_str(),
            record.work_type.to_db_str(),
            record.first_check_in.to_rfc3339(),
            record.last_check_out.map(|t| t.to_rfc3339()),
            timeline_json,
            record.ot_hours,
            record.created_at,
        ],
    )?;

    let mut created = record.clone();
    created.id = conn.last_insert_rowid();
    Ok(created)
}

/// `appendEvent`: read-modify-write of the timeline column plus optional
/// sibling fields.
///
/// NOT atomic against a second writer for the same (user, date): the full
/// timeline is re-written and the last write wins. A storage layer that
/// must support multi-device use would need a compare-and-swap on an
/// event-count column instead.
pub fn append_event(
    conn: &Connection,
    user: &str,
    date: &NaiveDate,
    event: &TimelineEvent,
    last_check_out: Option<DateTime<Local>>,
    ot_hours: Option<f64>,
) -> AppResult<()> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let timeline_json: String = {
        let mut stmt = conn.prepare(
            "SELECT timeline FROM day_records WHERE user = ?1 AND log_date = ?2",
        )?;
        stmt.query_row(params![user, date_str], |row| row.get(0))
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => AppError::NoRecord(date_str.clone()),
                other => AppError::Db(other),
            })?
    };

    let mut timeline: Vec<TimelineEvent> = serde_json::from_str(&timeline_json)
        .map_err(|e| AppError::InvalidEvent(e.to_string()))?;
    timeline.push(event.clone());

    let updated = serde_json::to_string(&timeline)
        .map_err(|e| AppError::InvalidEvent(e.to_string()))?;

    match (last_check_out, ot_hours) {
        (Some(out), None) => {
            conn.execute(
                "UPDATE day_records SET timeline = ?1, last_check_out = ?2
                 WHERE user = ?3 AND log_date = ?4",
                params![updated, out.to_rfc3339(), user, date_str],
            )?;
        }
        (None, Some(hours)) => {
            conn.execute(
                "UPDATE day_records SET timeline = ?1, ot_hours = ?2
                 WHERE user = ?3 AND log_date = ?4",
                params![updated, hours, user, date_str],
            )?;
        }
        _ => {
            conn.execute(
                "UPDATE day_records SET timeline = ?1
                 WHERE user = ?2 AND log_date = ?3",
                params![updated, user, date_str],
            )?;
        }
    }

    Ok(())
}

/// Day rows for the inclusive date range, oldest first. Historical rows
/// are read-only from the core's perspective.
pub fn load_records_between(
    pool: &mut DbPool,
    user: &str,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<DayRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM day_records
         WHERE user = ?1 AND log_date >= ?2 AND log_date <= ?3
         ORDER BY log_date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
