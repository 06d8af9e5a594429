pub mod checkin;
pub mod checkout;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod ot;
pub mod status;

use chrono::{DateTime, Local, NaiveDate};

use crate::config::Config;
use crate::errors::AppResult;
use crate::geo::GeofenceValidator;
use crate::utils::time::{local_instant, parse_optional_time};

/// Resolve the instant a transition happens at: `--at HH:MM` pinned to
/// the (possibly overridden) date, otherwise the wall clock.
pub fn resolve_instant(date: NaiveDate, at: Option<&String>) -> AppResult<DateTime<Local>> {
    match parse_optional_time(at)? {
        Some(t) => Ok(local_instant(date, t)),
        None => Ok(Local::now()),
    }
}

/// Build the geofence validator and feed it the one sample the CLI got.
/// No sample means the validator stays in `checking` and factory-gated
/// operations fail closed.
pub fn validator_from_args(cfg: &Config, lat: Option<f64>, lon: Option<f64>) -> GeofenceValidator {
    let mut validator =
        GeofenceValidator::new(cfg.site_latitude, cfg.site_longitude, cfg.site_radius_m);
    if let (Some(lat), Some(lon)) = (lat, lon) {
        validator.update(lat, lon);
    }
    validator
}
