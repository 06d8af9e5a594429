use crate::cli::commands::{resolve_instant, validator_from_args};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::machine::Attendance;
use crate::core::summary::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_date;
use crate::utils::time::hhmm;

/// `working → completed`; prints the break-adjusted normal hours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::CheckOut { lat, lon, date, at } = cmd {
        let d = parse_optional_date(date.as_ref())?;
        let now = resolve_instant(d, at.as_ref())?;
        let geofence = validator_from_args(cfg, *lat, *lon);
        let win = cfg.shift_window()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let mut attendance = Attendance::new(&mut pool, &cfg.user, d);
        let record = attendance.check_out(now, &geofence)?;

        let summary = Core::build_daily_summary(&record, &win);
        success(format!(
            "Checked out at {} on {}. Normal hours: {:.2}.",
            hhmm(now),
            record.date_str(),
            summary.normal_hours
        ));
    }

    Ok(())
}
