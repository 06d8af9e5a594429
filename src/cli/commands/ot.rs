use crate::cli::commands::resolve_instant;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::machine::Attendance;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_date;
use crate::utils::time::hhmm;

/// `ot-start` and `ot-end` share the same shape: resolve the instant,
/// run the transition, report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::OtStart { date, at } => {
            let d = parse_optional_date(date.as_ref())?;
            let now = resolve_instant(d, at.as_ref())?;

            let mut pool = DbPool::new(&cfg.database)?;
            let mut attendance = Attendance::new(&mut pool, &cfg.user, d);
            let record = attendance.start_ot(now)?;

            success(format!(
                "Overtime started at {} on {}.",
                hhmm(now),
                record.date_str()
            ));
        }
        Commands::OtEnd { date, at } => {
            let d = parse_optional_date(date.as_ref())?;
            let now = resolve_instant(d, at.as_ref())?;

            let mut pool = DbPool::new(&cfg.database)?;
            let mut attendance = Attendance::new(&mut pool, &cfg.user, d);
            let (record, ot_hours) = attendance.end_ot(now)?;

            success(format!(
                "Overtime ended at {} on {}. Billable OT: {:.2} h.",
                hhmm(now),
                record.date_str(),
                ot_hours
            ));
        }
        _ => {}
    }

    Ok(())
}
