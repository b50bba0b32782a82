//! Trip configuration as loaded from disk, and the validated route built from it.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{CalendarDate, Stop, TripConfigError};
use crate::mileage::LegMileageTable;
use crate::validate_route;

/// Raw trip configuration. Untrusted until turned into a [TripRoute].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripConfig {
  pub stops: Vec<Stop>,
  /// Per-leg distances in whole miles, index-aligned with `stops`.
  /// `leg_miles[0]` is the distance to the first stop and must be 0.
  pub leg_miles: Vec<u32>,
}

impl TripConfig {
  pub fn into_route(self) -> Result<TripRoute, TripConfigError> {
    TripRoute::new(self.stops, self.leg_miles)
  }
}

/// A validated, route-ordered stop list together with its mileage table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRoute {
  stops: Vec<Stop>,
  mileage: LegMileageTable,
}

impl TripRoute {
  /// Validates the stop list against the mileage table and builds the route.
  #[instrument(level = "trace", skip(stops, leg_miles))]
  pub fn new(stops: Vec<Stop>, leg_miles: Vec<u32>) -> Result<Self, TripConfigError> {
    validate_route::validate(&stops, &leg_miles)?;
    Ok(Self {
      stops,
      mileage: LegMileageTable::new(leg_miles),
    })
  }

  pub fn stops(&self) -> &[Stop] {
    &self.stops
  }

  pub fn mileage(&self) -> &LegMileageTable {
    &self.mileage
  }

  pub fn trip_start(&self) -> CalendarDate {
    self.stops[0].arrive_date
  }

  pub fn trip_end(&self) -> CalendarDate {
    self.stops[self.stops.len() - 1].depart_date
  }

  pub fn to_config(&self) -> TripConfig {
    TripConfig {
      stops: self.stops.clone(),
      leg_miles: self.mileage.leg_miles().to_vec(),
    }
  }
}
