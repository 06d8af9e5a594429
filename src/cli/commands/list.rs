use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_records_between;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::{describe_status, pad_right};
use crate::utils::time::hhmm;
use chrono::Datelike;

/// One summary row per recorded day in the period (default: current month).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let (from, to) = match period {
            Some(p) => date::period_bounds(p).map_err(AppError::InvalidDate)?,
            None => {
                let today = date::today();
                let month = format!("{:04}-{:02}", today.year(), today.month());
                date::period_bounds(&month).map_err(AppError::InvalidDate)?
            }
        };

        let win = cfg.shift_window()?;
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_records_between(&mut pool, &cfg.user, &from, &to)?;

        if records.is_empty() {
            info(format!(
                "No attendance records between {} and {}.",
                from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d")
            ));
            return Ok(());
        }

        println!(
            "📅 Attendance for {} ({} → {}):",
            cfg.user,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        );
        println!(
            "{} {} {} {} {} {} {}",
            pad_right("Date", 10),
            pad_right("Type", 8),
            pad_right("In", 5),
            pad_right("Out", 5),
            pad_right("Normal", 7),
            pad_right("OT", 6),
            "Status"
        );

        for rec in &records {
            let summary = Core::build_daily_summary(rec, &win);
            let (label, color) = describe_status(summary.status.as_str());

            println!(
                "{} {} {} {} {} {} {}{}\x1b[0m",
                pad_right(&rec.date_str(), 10),
                pad_right(summary.work_type.label(), 8),
                pad_right(&hhmm(summary.first_check_in), 5),
                pad_right(
                    &summary
                        .last_check_out
                        .map(hhmm)
                        .unwrap_or_else(|| "-".to_string()),
                    5
                ),
                pad_right(&format!("{:.2}", summary.normal_hours), 7),
                pad_right(&format!("{:.2}", summary.ot_hours), 6),
                color,
                label
            );
        }
    }

    Ok(())
}
