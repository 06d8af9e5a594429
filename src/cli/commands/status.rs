use std::io::Write;
use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::cli::commands::validator_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::elapsed::elapsed_display;
use crate::core::machine::Attendance;
use crate::core::summary::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::models::work_status::WorkStatus;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::{describe_status, fmt_hours};
use crate::utils::time::hhmm;

/// Show the derived summary for a day; with `--watch`, keep a 1-second
/// elapsed ticker running while overtime is in progress.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        date,
        watch,
        lat,
        lon,
    } = cmd
    {
        let d = parse_optional_date(date.as_ref())?;
        let win = cfg.shift_window()?;
        let geofence = validator_from_args(cfg, *lat, *lon);

        let mut pool = DbPool::new(&cfg.database)?;
        let mut attendance = Attendance::new(&mut pool, &cfg.user, d);

        let record = match attendance.load()? {
            None => {
                info(format!(
                    "No attendance record for {} — status: idle.",
                    d.format("%Y-%m-%d")
                ));
                return Ok(());
            }
            Some(rec) => rec,
        };

        let summary = Core::build_daily_summary(&record, &win);
        let (label, color) = describe_status(summary.status.as_str());

        println!("📅 {} — {}", record.date_str(), summary.work_type.label());
        println!("   Status    : {}{}\x1b[0m", color, label);
        println!("   Check-in  : {}", hhmm(summary.first_check_in));
        println!(
            "   Check-out : {}",
            summary
                .last_check_out
                .map(hhmm)
                .unwrap_or_else(|| "-".to_string())
        );
        println!("   Normal    : {}", fmt_hours(Some(summary.normal_hours)));
        println!(
            "   Overtime  : {}",
            if summary.status == WorkStatus::OtCompleted || summary.ot_hours > 0.0 {
                fmt_hours(Some(summary.ot_hours))
            } else {
                "-".to_string()
            }
        );
        if summary.work_type.is_factory() {
            // classification of the sample passed on the command line,
            // or the pending state when none was
            println!("   Geofence  : {}", geofence.message());
        }

        if let Some(reason) = &summary.timeline_warning {
            warning(format!("Timeline looks inconsistent: {}", reason));
        }

        if summary.status == WorkStatus::OtWorking {
            if let Some(start) = record.last_event_of(EventKind::OtStart).map(|ev| ev.timestamp) {
                println!("   Elapsed   : {}", elapsed_display(start, Local::now()));
            }

            if *watch {
                watch_overtime(&mut attendance)?;
            }
        }
    }

    Ok(())
}

/// Re-derive the elapsed string every second until overtime ends
/// (possibly from another session).
fn watch_overtime(attendance: &mut Attendance<'_>) -> AppResult<()> {
    loop {
        let record = match attendance.load()? {
            Some(rec) => rec,
            None => break,
        };
        if record.status() != WorkStatus::OtWorking {
            println!();
            info("Overtime ended.");
            break;
        }

        if let Some(start) = record.last_event_of(EventKind::OtStart).map(|ev| ev.timestamp) {
            print!("\r⏱  {}", elapsed_display(start, Local::now()));
            std::io::stdout().flush()?;
        }

        thread::sleep(Duration::from_secs(1));
    }
    Ok(())
}
