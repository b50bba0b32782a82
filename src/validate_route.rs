//! Configuration-time validation of a stop list and its mileage table.
//!
//! A route that passes has at-city windows `[arrive, depart)` and in-transit
//! windows `[depart[i], arrive[i + 1])` that together tile `[trip_start, trip_end)`
//! with no gaps or overlaps.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::types::{Stop, TripConfigError};

/// Rejects malformed routes. Run once when the trip is loaded.
#[instrument(level = "trace", skip(stops, leg_miles), fields(stops = stops.len()))]
pub fn validate(stops: &[Stop], leg_miles: &[u32]) -> Result<(), TripConfigError> {
  let r = check(stops, leg_miles);
  if let Err(e) = &r {
    debug!(error = %e, "rejected trip route");
  }
  r
}

fn check(stops: &[Stop], leg_miles: &[u32]) -> Result<(), TripConfigError> {
  if stops.is_empty() {
    return Err(TripConfigError::EmptyRoute);
  }
  if leg_miles.len() != stops.len() {
    return Err(TripConfigError::LegCountMismatch {
      stops: stops.len(),
      legs: leg_miles.len(),
    });
  }
  if leg_miles[0] != 0 {
    return Err(TripConfigError::NonZeroFirstLeg(leg_miles[0]));
  }

  let mut seen = HashSet::new();
  for stop in stops {
    if stop.arrive_date > stop.depart_date {
      return Err(TripConfigError::InvertedStay {
        city: stop.city.clone(),
        arrive: stop.arrive_date,
        depart: stop.depart_date,
      });
    }
    if !seen.insert(stop.city.as_str()) {
      return Err(TripConfigError::DuplicateCity(stop.city.clone()));
    }
  }

  for pair in stops.windows(2) {
    let (prev, next) = (&pair[0], &pair[1]);
    if next.sort_order <= prev.sort_order {
      return Err(TripConfigError::UnsortedStops {
        city: next.city.clone(),
        sort_order: next.sort_order,
      });
    }
    if next.arrive_date < prev.depart_date {
      return Err(TripConfigError::OverlappingStops {
        earlier: prev.city.clone(),
        later: next.city.clone(),
        depart: prev.depart_date,
        arrive: next.arrive_date,
      });
    }
  }
  Ok(())
}
