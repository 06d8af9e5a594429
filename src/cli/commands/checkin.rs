use crate::cli::commands::{resolve_instant, validator_from_args};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::machine::Attendance;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::work_type::WorkType;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_optional_date;
use crate::utils::time::hhmm;

/// First transition of the day: create (or re-enter) today's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::CheckIn {
        work_type,
        lat,
        lon,
        date,
        at,
    } = cmd
    {
        let wt = WorkType::from_code(work_type).ok_or_else(|| {
            AppError::InvalidWorkType(format!(
                "Invalid work type '{}'. Use 'factory' or 'site'.",
                work_type
            ))
        })?;

        let d = parse_optional_date(date.as_ref())?;
        let now = resolve_instant(d, at.as_ref())?;
        let geofence = validator_from_args(cfg, *lat, *lon);

        let mut pool = DbPool::new(&cfg.database)?;
        let mut attendance = Attendance::new(&mut pool, &cfg.user, d);
        let record = attendance.check_in(wt, now, &geofence)?;

        success(format!(
            "Checked in ({}) at {} on {}. Status: working.",
            wt.label(),
            hhmm(now),
            record.date_str()
        ));
        if wt.is_factory() {
            info(format!("Geofence: {}", geofence.message()));
        }
    }

    Ok(())
}
