//! Geofence validation for factory check-in/out.
//!
//! The validator is an explicitly owned object: the caller feeds it
//! coordinate samples (or a failure) and queries the classification.
//! `Checking` and `Error` both refuse gated transitions — an unknown
//! position is never treated as in range.

use crate::errors::{AppError, AppResult};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two (lat, lon) points,
/// haversine formula.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeofenceStatus {
    /// No position sample received yet.
    Checking,
    InRange { distance_m: f64 },
    OutOfRange { distance_m: f64 },
    /// The position source failed (no capability, timeout, ...).
    Error(String),
}

/// Classifies position samples against a fixed reference point.
#[derive(Debug, Clone)]
pub struct GeofenceValidator {
    ref_lat: f64,
    ref_lon: f64,
    radius_m: f64,
    status: GeofenceStatus,
}

impl GeofenceValidator {
    pub fn new(ref_lat: f64, ref_lon: f64, radius_m: f64) -> Self {
        Self {
            ref_lat,
            ref_lon,
            radius_m,
            status: GeofenceStatus::Checking,
        }
    }

    /// Feed one position sample; re-classifies on every call.
    pub fn update(&mut self, lat: f64, lon: f64) -> &GeofenceStatus {
        let distance_m = haversine_distance(self.ref_lat, self.ref_lon, lat, lon);
        self.status = if distance_m <= self.radius_m {
            GeofenceStatus::InRange { distance_m }
        } else {
            GeofenceStatus::OutOfRange { distance_m }
        };
        &self.status
    }

    /// Record a failure of the position source.
    pub fn fail(&mut self, reason: &str) {
        self.status = GeofenceStatus::Error(reason.to_string());
    }

    pub fn status(&self) -> &GeofenceStatus {
        &self.status
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Human-readable classification, for the status panel.
    pub fn message(&self) -> String {
        match &self.status {
            GeofenceStatus::Checking => "waiting for a position fix".to_string(),
            GeofenceStatus::InRange { distance_m } => format!(
                "within the site area ({:.0} m from the gate, allowed {:.0} m)",
                distance_m, self.radius_m
            ),
            GeofenceStatus::OutOfRange { distance_m } => format!(
                "outside the site area ({:.0} m from the gate, allowed {:.0} m)",
                distance_m, self.radius_m
            ),
            GeofenceStatus::Error(reason) => format!("position error: {}", reason),
        }
    }

    /// Gate for factory transitions: fail closed on anything but InRange.
    pub fn ensure_in_range(&self) -> AppResult<()> {
        match &self.status {
            GeofenceStatus::InRange { .. } => Ok(()),
            GeofenceStatus::OutOfRange { distance_m } => Err(AppError::OutOfRange {
                distance_m: *distance_m,
                radius_m: self.radius_m,
            }),
            GeofenceStatus::Checking => Err(AppError::LocationUnavailable(
                "no position fix yet, try again in a moment".to_string(),
            )),
            GeofenceStatus::Error(reason) => Err(AppError::LocationUnavailable(reason.clone())),
        }
    }
}
