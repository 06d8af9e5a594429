use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{SITE_LAT, SITE_LON, setup_test_db, sl};

#[test]
fn test_full_day_flow_factory() {
    let db_path = setup_test_db("full_day_flow");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 08:40 check-in inside the geofence
    sl().args([
        "--db", &db_path, "check-in", "factory", "--lat", SITE_LAT, "--lon", SITE_LON, "--date",
        "2026-03-02", "--at", "08:40",
    ])
    .assert()
    .success()
    .stdout(contains("Checked in (Factory) at 08:40"));

    sl().args(["--db", &db_path, "status", "--date", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("Working"))
        .stdout(contains("Check-in  : 08:40"));

    // 17:10 checkout: 08:40–17:10 minus the 12:00–13:00 break = 7.5 h
    sl().args([
        "--db", &db_path, "check-out", "--lat", SITE_LAT, "--lon", SITE_LON, "--date",
        "2026-03-02", "--at", "17:10",
    ])
    .assert()
    .success()
    .stdout(contains("Normal hours: 7.50"));

    sl().args([
        "--db", &db_path, "ot-start", "--date", "2026-03-02", "--at", "18:00",
    ])
    .assert()
    .success()
    .stdout(contains("Overtime started at 18:00"));

    // 65 minutes of OT floors to 1.0 h
    sl().args([
        "--db", &db_path, "ot-end", "--date", "2026-03-02", "--at", "19:05",
    ])
    .assert()
    .success()
    .stdout(contains("Billable OT: 1.00"));

    sl().args(["--db", &db_path, "status", "--date", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("Overtime done"))
        .stdout(contains("Normal    : 7.50 h"))
        .stdout(contains("Overtime  : 1.00 h"));
}

#[test]
fn test_factory_checkin_without_position_refused() {
    let db_path = setup_test_db("checkin_no_position");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // no --lat/--lon: the validator never leaves `checking` and the
    // transition fails closed
    sl().args([
        "--db", &db_path, "check-in", "factory", "--date", "2026-03-02", "--at", "08:40",
    ])
    .assert()
    .failure()
    .stderr(contains("❌"))
    .stderr(contains("Position unavailable"));

    // nothing was written
    sl().args(["--db", &db_path, "status", "--date", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("No attendance record"));
}

#[test]
fn test_factory_checkin_out_of_range_refused() {
    let db_path = setup_test_db("checkin_out_of_range");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db", &db_path, "check-in", "factory", "--lat", "45.6000", "--lon", "9.4000", "--date",
        "2026-03-02", "--at", "08:40",
    ])
    .assert()
    .failure()
    .stderr(contains("Outside the allowed area"));

    sl().args(["--db", &db_path, "status", "--date", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("No attendance record"));
}

#[test]
fn test_site_checkin_bypasses_geofence() {
    let db_path = setup_test_db("site_checkin");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // on-site work is not location-gated: no coordinates needed
    sl().args([
        "--db", &db_path, "check-in", "site", "--date", "2026-03-03", "--at", "09:00",
    ])
    .assert()
    .success()
    .stdout(contains("Checked in (On-site)"));

    // and checkout needs no coordinates either for a site day
    sl().args([
        "--db", &db_path, "check-out", "--date", "2026-03-03", "--at", "17:30",
    ])
    .assert()
    .success();

    // no geofence on the panel for a day that is not gated
    sl().args(["--db", &db_path, "status", "--date", "2026-03-03"])
        .assert()
        .success()
        .stdout(contains("Geofence").not());
}

#[test]
fn test_status_shows_geofence_line_for_factory_day() {
    let db_path = setup_test_db("status_geofence");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db", &db_path, "check-in", "factory", "--lat", SITE_LAT, "--lon", SITE_LON, "--date",
        "2026-03-02", "--at", "08:40",
    ])
    .assert()
    .success();

    // with a position the panel classifies it against the site radius
    sl().args([
        "--db", &db_path, "status", "--date", "2026-03-02", "--lat", SITE_LAT, "--lon", SITE_LON,
    ])
    .assert()
    .success()
    .stdout(contains("Geofence  : within the site area"));

    // without one it shows the pending classification instead
    sl().args(["--db", &db_path, "status", "--date", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("Geofence  : waiting for a position fix"));
}

#[test]
fn test_checkin_in_dst_gap_settles_after_the_jump() {
    let db_path = setup_test_db("dst_gap");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 02:30 never occurs on the spring-forward day in this zone; the
    // instant settles on the same wall time one hour later instead of
    // silently becoming "now"
    sl().env("TZ", "EST5EDT,M3.2.0,M11.1.0")
        .args([
            "--db", &db_path, "check-in", "site", "--date", "2026-03-08", "--at", "02:30",
        ])
        .assert()
        .success()
        .stdout(contains("at 03:30"));
}

#[test]
fn test_double_checkin_rejected() {
    let db_path = setup_test_db("double_checkin");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db", &db_path, "check-in", "site", "--date", "2026-03-04", "--at", "08:30",
    ])
    .assert()
    .success();

    sl().args([
        "--db", &db_path, "check-in", "site", "--date", "2026-03-04", "--at", "08:35",
    ])
    .assert()
    .failure()
    .stderr(contains("day status is 'working'"));
}

#[test]
fn test_ot_start_requires_completed_day() {
    let db_path = setup_test_db("ot_start_wrong_state");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db", &db_path, "check-in", "site", "--date", "2026-03-05", "--at", "08:30",
    ])
    .assert()
    .success();

    // still working, not checked out: must be rejected with no append
    sl().args([
        "--db", &db_path, "ot-start", "--date", "2026-03-05", "--at", "18:00",
    ])
    .assert()
    .failure()
    .stderr(contains("requires 'completed'"));

    // timeline must be unchanged (exactly the arrival event)
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let timeline: String = conn
        .query_row(
            "SELECT timeline FROM day_records WHERE log_date = '2026-03-05'",
            [],
            |row| row.get(0),
        )
        .expect("timeline row");
    let events: serde_json::Value = serde_json::from_str(&timeline).expect("timeline json");
    assert_eq!(events.as_array().map(|a| a.len()), Some(1));
    assert_eq!(events[0]["event"], "arrive_site");
}

#[test]
fn test_checkout_without_record_rejected() {
    let db_path = setup_test_db("checkout_no_record");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db", &db_path, "check-out", "--date", "2026-03-06", "--at", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("No attendance record"));
}

#[test]
fn test_list_shows_period_rows() {
    let db_path = setup_test_db("list_period");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for (date, from, to) in [
        ("2026-04-01", "08:30", "17:30"),
        ("2026-04-02", "09:00", "17:00"),
    ] {
        sl().args([
            "--db", &db_path, "check-in", "site", "--date", date, "--at", from,
        ])
        .assert()
        .success();
        sl().args(["--db", &db_path, "check-out", "--date", date, "--at", to])
            .assert()
            .success();
    }

    sl().args(["--db", &db_path, "list", "--period", "2026-04"])
        .assert()
        .success()
        .stdout(contains("2026-04-01"))
        .stdout(contains("2026-04-02"))
        .stdout(contains("8.00"))
        .stdout(contains("7.00"))
        .stdout(contains("2026-03").not());
}

#[test]
fn test_log_records_transitions() {
    let db_path = setup_test_db("audit_log");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sl().args([
        "--db", &db_path, "check-in", "site", "--date", "2026-03-09", "--at", "08:30",
    ])
    .assert()
    .success();

    sl().args([
        "--db", &db_path, "check-out", "--date", "2026-03-09", "--at", "17:30",
    ])
    .assert()
    .success();

    sl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("check_in"))
        .stdout(contains("check_out"));
}
