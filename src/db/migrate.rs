use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `day_records` table exists.
fn day_records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='day_records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `day_records` has a given column.
fn day_records_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('day_records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `day_records` table with the modern schema.
///
/// One row per (user, log_date); `timeline` holds the JSON array of
/// attendance events and is the authoritative state.
fn create_day_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS day_records (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user           TEXT NOT NULL,
            log_date       TEXT NOT NULL,
            work_type      TEXT NOT NULL CHECK(work_type IN ('in_factory','on_site')),
            first_check_in TEXT NOT NULL,
            last_check_out TEXT,
            timeline       TEXT NOT NULL DEFAULT '[]',
            ot_hours       REAL,
            created_at     TEXT NOT NULL,
            UNIQUE(user, log_date)
        );

        CREATE INDEX IF NOT EXISTS idx_day_records_user_date ON day_records(user, log_date);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `day_records` table to include the `ot_hours` column
/// (added when the overtime flow landed).
fn migrate_add_ot_hours(conn: &Connection) -> Result<()> {
    if !day_records_table_exists(conn)? {
        return Ok(());
    }

    if day_records_has_column(conn, "ot_hours")? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE day_records ADD COLUMN ot_hours REAL;")?;
    Ok(())
}

/// Run every pending migration; safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_day_records_table(conn)?;
    migrate_add_ot_hours(conn)?;
    Ok(())
}
