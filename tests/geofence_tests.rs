use shiftlog::errors::AppError;
use shiftlog::geo::{GeofenceStatus, GeofenceValidator, haversine_distance};

const REF_LAT: f64 = 45.4642;
const REF_LON: f64 = 9.1900;

#[test]
fn haversine_one_degree_of_longitude_at_equator() {
    // ~111.2 km
    let d = haversine_distance(0.0, 0.0, 0.0, 1.0);
    assert!((d - 111_195.0).abs() < 100.0, "got {}", d);
}

#[test]
fn haversine_zero_for_identical_points() {
    assert_eq!(haversine_distance(REF_LAT, REF_LON, REF_LAT, REF_LON), 0.0);
}

#[test]
fn exact_reference_point_is_in_range_for_any_radius() {
    let mut v = GeofenceValidator::new(REF_LAT, REF_LON, 0.0);
    v.update(REF_LAT, REF_LON);
    assert!(matches!(v.status(), GeofenceStatus::InRange { .. }));
    assert!(v.ensure_in_range().is_ok());
}

#[test]
fn sample_beyond_radius_is_out_of_range() {
    let mut v = GeofenceValidator::new(REF_LAT, REF_LON, 250.0);
    // roughly 15 km away
    v.update(45.60, 9.20);
    assert!(matches!(v.status(), GeofenceStatus::OutOfRange { .. }));

    match v.ensure_in_range() {
        Err(AppError::OutOfRange { distance_m, radius_m }) => {
            assert!(distance_m > radius_m);
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

#[test]
fn no_sample_stays_checking_and_refuses() {
    let v = GeofenceValidator::new(REF_LAT, REF_LON, 250.0);
    assert_eq!(*v.status(), GeofenceStatus::Checking);
    assert!(matches!(
        v.ensure_in_range(),
        Err(AppError::LocationUnavailable(_))
    ));
}

#[test]
fn source_failure_is_reported_not_defaulted() {
    let mut v = GeofenceValidator::new(REF_LAT, REF_LON, 250.0);
    v.fail("no positioning capability");
    assert!(matches!(v.status(), GeofenceStatus::Error(_)));
    assert!(matches!(
        v.ensure_in_range(),
        Err(AppError::LocationUnavailable(_))
    ));
    assert!(v.message().contains("no positioning capability"));
}

#[test]
fn reclassified_on_every_sample() {
    let mut v = GeofenceValidator::new(REF_LAT, REF_LON, 250.0);
    v.update(45.60, 9.20);
    assert!(matches!(v.status(), GeofenceStatus::OutOfRange { .. }));

    // walking back to the gate flips the classification
    v.update(REF_LAT, REF_LON);
    assert!(matches!(v.status(), GeofenceStatus::InRange { .. }));
}
