//! Tests for report helpers and error mapping.

use chrono::NaiveDate;

use aqualedger_shared::AppError;

use super::{year_bounds, ReportError};

#[test]
fn year_bounds_cover_whole_year() {
    let (start, end) = year_bounds(2025).unwrap();
    assert_eq!(start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
}

#[test]
fn year_bounds_leap_year() {
    // Feb 29 falls inside, not on, the bounds; the range is inclusive.
    let (start, end) = year_bounds(2024).unwrap();
    let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert!(start < leap_day && leap_day < end);
}

#[test]
fn year_bounds_out_of_range() {
    assert!(year_bounds(1_000_000).is_none());
}

#[test]
fn invalid_year_maps_to_validation() {
    let app: AppError = ReportError::InvalidYear(1_000_000).into();
    assert_eq!(app.status_code(), 400);
    assert_eq!(app.error_code(), "VALIDATION_ERROR");
}

#[test]
fn missing_report_maps_to_not_found() {
    let app: AppError = ReportError::NotFound(2025).into();
    assert_eq!(app.status_code(), 404);
    assert!(app.to_string().contains("2025"));
}
