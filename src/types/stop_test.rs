//! Tests for `Stop`.

use chrono::NaiveDate;

use super::Stop;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn occupied_on_arrival_day() {
  let s = Stop::new("Boston", d(2026, 6, 12), d(2026, 6, 15), 1);
  assert!(s.is_occupied_on(d(2026, 6, 12)));
  assert!(s.is_occupied_on(d(2026, 6, 14)));
}

#[test]
fn not_occupied_on_departure_day() {
  let s = Stop::new("Boston", d(2026, 6, 12), d(2026, 6, 15), 1);
  assert!(!s.is_occupied_on(d(2026, 6, 15)));
  assert!(!s.is_occupied_on(d(2026, 6, 11)));
}

#[test]
fn same_day_stop_is_never_occupied() {
  let s = Stop::new("Layover", d(2026, 6, 15), d(2026, 6, 15), 1);
  assert!(!s.is_occupied_on(d(2026, 6, 15)));
  assert_eq!(s.nights(), 0);
}

#[test]
fn deserializes_iso_dates() {
  let json = r#"{"city":"NYC","arrive_date":"2026-06-15","depart_date":"2026-06-17","sort_order":2}"#;
  let s: Stop = serde_json::from_str(json).unwrap();
  assert_eq!(s, Stop::new("NYC", d(2026, 6, 15), d(2026, 6, 17), 2));
  assert_eq!(s.nights(), 2);
}

#[test]
fn rejects_malformed_date() {
  let json = r#"{"city":"NYC","arrive_date":"2026-13-01","depart_date":"2026-06-17","sort_order":2}"#;
  assert!(serde_json::from_str::<Stop>(json).is_err());
}
