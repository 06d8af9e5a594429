use chrono::{DateTime, Local, NaiveDate};

use shiftlog::core::calculator::ShiftWindow;
use shiftlog::core::calculator::elapsed::elapsed_display;
use shiftlog::core::calculator::normal::compute_normal_hours;
use shiftlog::core::calculator::ot::compute_ot_hours;
use shiftlog::utils::time::{local_instant, parse_time};

fn at(hhmm: &str) -> DateTime<Local> {
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    local_instant(date, parse_time(hhmm).unwrap())
}

#[test]
fn normal_hours_clamped_to_shift_window() {
    // outside the shift on both ends: only 08:30–17:30 minus the break
    let hours = compute_normal_hours(at("07:00"), at("18:00"), &ShiftWindow::default());
    assert_eq!(hours, 8.0);
}

#[test]
fn normal_hours_partial_break_overlap() {
    // 08:30–12:30 overlaps the break by 30 minutes
    let hours = compute_normal_hours(at("08:30"), at("12:30"), &ShiftWindow::default());
    assert_eq!(hours, 3.5);
}

#[test]
fn normal_hours_entirely_inside_break_is_zero() {
    let hours = compute_normal_hours(at("12:05"), at("12:55"), &ShiftWindow::default());
    assert_eq!(hours, 0.0);
}

#[test]
fn normal_hours_checkout_before_shift_start_is_zero() {
    let hours = compute_normal_hours(at("06:00"), at("07:30"), &ShiftWindow::default());
    assert_eq!(hours, 0.0);
}

#[test]
fn normal_hours_checkin_after_shift_end_is_zero() {
    let hours = compute_normal_hours(at("18:00"), at("20:00"), &ShiftWindow::default());
    assert_eq!(hours, 0.0);
}

#[test]
fn normal_hours_typical_day() {
    // 08:40–17:10 minus the 1 h break
    let hours = compute_normal_hours(at("08:40"), at("17:10"), &ShiftWindow::default());
    assert_eq!(hours, 7.5);
}

#[test]
fn normal_hours_inverted_interval_is_zero() {
    let hours = compute_normal_hours(at("17:00"), at("09:00"), &ShiftWindow::default());
    assert_eq!(hours, 0.0);
}

#[test]
fn ot_floors_to_half_hour_units() {
    assert_eq!(compute_ot_hours(at("18:00"), at("18:49")), 0.5);
    assert_eq!(compute_ot_hours(at("18:00"), at("18:29")), 0.0);
    assert_eq!(compute_ot_hours(at("18:00"), at("19:00")), 1.0);
    assert_eq!(compute_ot_hours(at("18:00"), at("19:05")), 1.0);
}

#[test]
fn ot_has_no_upper_cap() {
    assert_eq!(compute_ot_hours(at("18:00"), at("23:45")), 5.5);
}

#[test]
fn ot_never_negative() {
    assert_eq!(compute_ot_hours(at("19:00"), at("18:00")), 0.0);
    assert_eq!(compute_ot_hours(at("18:00"), at("18:00")), 0.0);
}

#[test]
fn elapsed_formats_hh_mm_ss() {
    assert_eq!(elapsed_display(at("18:00"), at("19:02")), "01:02:00");
    assert_eq!(elapsed_display(at("18:00"), at("18:00")), "00:00:00");
}

#[test]
fn elapsed_clamps_clock_skew_to_zero() {
    assert_eq!(elapsed_display(at("19:00"), at("18:59")), "00:00:00");
}
