//! Unit tests for reporting helpers.

use atsp_ga::utils::{format_duration, relative_error};
use std::time::Duration;

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00.000s");
    assert_eq!(format_duration(Duration::from_millis(61_250)), "0h 01m 01.250s");
    assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 5)), "3h 00m 05.000s");
}

#[test]
fn test_relative_error() {
    assert_eq!(relative_error(1776, 1776), Some(0.0));

    let error = relative_error(1850, 1776).unwrap();
    assert!((error - 4.166_666).abs() < 1e-3);

    // Below the optimum only happens with a wrong optimum, still reported
    assert!(relative_error(1700, 1776).unwrap() < 0.0);
}

#[test]
fn test_relative_error_zero_optimum() {
    assert_eq!(relative_error(10, 0), None);
}
