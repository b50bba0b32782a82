//! Errors raised while loading or validating a trip configuration.
//!
//! All of these are configuration problems: they are reported once when the
//! trip is loaded and never surface from the resolver.

use thiserror::Error;

use super::CalendarDate;

#[derive(Error, Debug)]
pub enum TripConfigError {
  #[error("trip has no stops")]
  EmptyRoute,
  #[error("stop '{city}' departs ({depart}) before it arrives ({arrive})")]
  InvertedStay {
    city: String,
    arrive: CalendarDate,
    depart: CalendarDate,
  },
  #[error("stop '{city}' (sort_order {sort_order}) is out of route order")]
  UnsortedStops { city: String, sort_order: i32 },
  #[error("city '{0}' appears more than once in the route")]
  DuplicateCity(String),
  #[error("stop '{later}' arrives on {arrive} before '{earlier}' departs on {depart}")]
  OverlappingStops {
    earlier: String,
    later: String,
    depart: CalendarDate,
    arrive: CalendarDate,
  },
  #[error("mileage table has {legs} legs but the route has {stops} stops")]
  LegCountMismatch { stops: usize, legs: usize },
  #[error("distance to the first stop must be 0, found {0}")]
  NonZeroFirstLeg(u32),
  #[error("impossible to read trip configuration")]
  Io(#[from] std::io::Error),
  #[error("invalid trip configuration JSON")]
  Json(#[from] serde_json::Error),
}
