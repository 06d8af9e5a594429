//! Unified application error type.
//! All modules (db, core, geo, cli) return AppError so that every failure
//! is handled at the operation boundary and surfaced to the user directly.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid work type: {0}")]
    InvalidWorkType(String),

    #[error("Invalid timeline event: {0}")]
    InvalidEvent(String),

    // ---------------------------
    // State machine errors
    // ---------------------------
    #[error("Cannot {action}: day status is '{actual}' (requires '{expected}')")]
    WrongState {
        action: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("No attendance record for {0}")]
    NoRecord(String),

    #[error("Timeline error: {0}")]
    Timeline(String),

    // ---------------------------
    // Geofence errors
    // ---------------------------
    #[error("Outside the allowed area: {distance_m:.0} m from the site (allowed {radius_m:.0} m)")]
    OutOfRange { distance_m: f64, radius_m: f64 },

    #[error("Position unavailable: {0}")]
    LocationUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
