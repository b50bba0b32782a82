//! Derived position of the travelers along the route for one calendar day.

use serde::{Deserialize, Serialize};

use super::{StopStatus, TripPhase};

/// Derived position of the travelers along the route for one calendar day.
///
/// Always recomputed from the stop list; never persisted. Field names
/// serialize in camelCase for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripState {
  pub phase: TripPhase,
  /// `-1` before the trip, `stops.len()` after it, otherwise the index of the
  /// most recently reached stop.
  pub current_stop_index: i64,
  /// Position along the route in `[0, 1]`.
  pub track_progress: f64,
  /// 1-based day count from the first arrival; `None` outside the trip.
  pub day_of_trip: Option<i64>,
  pub total_days: i64,
  pub miles_covered: u32,
  pub total_miles: u32,
  /// One entry per stop, in route order.
  pub stop_statuses: Vec<StopStatus>,
}

impl TripState {
  pub fn miles_remaining(&self) -> u32 {
    self.total_miles.saturating_sub(self.miles_covered)
  }

  /// Index of the stop currently being occupied, if any. `None` while in
  /// transit or outside the trip.
  pub fn current_stop(&self) -> Option<usize> {
    self
      .stop_statuses
      .iter()
      .position(|s| *s == StopStatus::Current)
  }

  pub fn is_in_transit(&self) -> bool {
    self.phase == TripPhase::During && self.current_stop().is_none()
  }
}
