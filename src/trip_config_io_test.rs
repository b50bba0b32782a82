//! Tests for trip configuration load/save.

use chrono::NaiveDate;

use crate::trip_config_io::{TRIP_CONFIG_FILENAME, load_trip_config, save_trip_config};
use crate::types::{Stop, TripConfig, TripConfigError};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn config() -> TripConfig {
  TripConfig {
    stops: vec![
      Stop::new("Boston", d(2026, 6, 12), d(2026, 6, 15), 1),
      Stop::new("NYC", d(2026, 6, 15), d(2026, 6, 17), 2),
    ],
    leg_miles: vec![0, 215],
  }
}

#[test]
fn save_then_load() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join(TRIP_CONFIG_FILENAME);
  save_trip_config(&path, &config()).unwrap();
  assert!(path.exists());
  let route = load_trip_config(&path).unwrap();
  assert_eq!(route.stops()[1].city, "NYC");
  assert_eq!(route.mileage().total_miles(), 215);
}

#[test]
fn saved_file_uses_iso_dates() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(TRIP_CONFIG_FILENAME);
  save_trip_config(&path, &config()).unwrap();
  let text = std::fs::read_to_string(&path).unwrap();
  assert!(text.contains("\"2026-06-12\""));
}

#[test]
fn load_missing_file_returns_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_trip_config(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(TripConfigError::Io(_))));
}

#[test]
fn load_malformed_date_returns_json_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(TRIP_CONFIG_FILENAME);
  std::fs::write(
    &path,
    r#"{"stops":[{"city":"X","arrive_date":"12/06/2026","depart_date":"2026-06-15","sort_order":1}],"leg_miles":[0]}"#,
  )
  .unwrap();
  assert!(matches!(
    load_trip_config(&path),
    Err(TripConfigError::Json(_))
  ));
}

#[test]
fn load_rejects_invalid_route() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(TRIP_CONFIG_FILENAME);
  let mut cfg = config();
  cfg.leg_miles.push(99);
  save_trip_config(&path, &cfg).unwrap();
  assert!(matches!(
    load_trip_config(&path),
    Err(TripConfigError::LegCountMismatch { stops: 2, legs: 3 })
  ));
}
