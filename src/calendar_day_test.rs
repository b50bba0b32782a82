//! Tests for calendar-day arithmetic.

use chrono::NaiveDate;

use crate::calendar_day::{day_difference, ordinal_day, parse_calendar_date, to_ordinal_day, today};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn parses_iso_date() {
  assert_eq!(parse_calendar_date("2026-06-12").unwrap(), d(2026, 6, 12));
}

#[test]
fn parse_ignores_surrounding_whitespace() {
  assert_eq!(parse_calendar_date(" 2026-06-12\n").unwrap(), d(2026, 6, 12));
}

#[test]
fn parse_rejects_malformed() {
  let e = parse_calendar_date("June 12").unwrap_err();
  assert_eq!(e.input, "June 12");
  assert!(e.to_string().contains("YYYY-MM-DD"));
  assert!(parse_calendar_date("2026-02-30").is_err());
  assert!(parse_calendar_date("").is_err());
}

#[test]
fn ordinal_days_are_consecutive() {
  let a = to_ordinal_day("2026-06-30").unwrap();
  let b = to_ordinal_day("2026-07-01").unwrap();
  assert_eq!(b - a, 1);
}

#[test]
fn ordinal_day_of_epoch_start() {
  assert_eq!(ordinal_day(d(1, 1, 1)), 1);
}

#[test]
fn day_difference_spans_dst_and_month_boundaries() {
  // US DST starts 2026-03-08; calendar days must not be skewed by it.
  assert_eq!(day_difference(d(2026, 3, 7), d(2026, 3, 9)), 2);
  assert_eq!(day_difference(d(2026, 6, 12), d(2026, 6, 20)), 8);
  assert_eq!(day_difference(d(2028, 2, 28), d(2028, 3, 1)), 2);
}

#[test]
fn day_difference_is_negative_backwards() {
  assert_eq!(day_difference(d(2026, 6, 20), d(2026, 6, 12)), -8);
  assert_eq!(day_difference(d(2026, 6, 12), d(2026, 6, 12)), 0);
}

#[test]
fn today_matches_ordinal_roundtrip() {
  let t = today();
  assert_eq!(day_difference(t, t), 0);
  assert_eq!(to_ordinal_day(&t.to_string()).unwrap(), ordinal_day(t));
}
