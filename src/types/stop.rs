//! One city leg of the trip.

use serde::{Deserialize, Serialize};

use super::CalendarDate;

/// One city leg of the trip. Both dates are inclusive calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
  /// Display name; also the identity key within a route.
  pub city: String,
  pub arrive_date: CalendarDate,
  pub depart_date: CalendarDate,
  /// Route position. Stops are consumed in ascending `sort_order`.
  pub sort_order: i32,
}

impl Stop {
  pub fn new(
    city: impl Into<String>,
    arrive_date: CalendarDate,
    depart_date: CalendarDate,
    sort_order: i32,
  ) -> Self {
    Self {
      city: city.into(),
      arrive_date,
      depart_date,
      sort_order,
    }
  }

  /// True when `date` falls in `[arrive_date, depart_date)`. The departure day
  /// belongs to the following leg, not to the stay.
  pub fn is_occupied_on(&self, date: CalendarDate) -> bool {
    self.arrive_date <= date && date < self.depart_date
  }

  /// Nights spent at the stop.
  pub fn nights(&self) -> i64 {
    (self.depart_date - self.arrive_date).num_days()
  }
}
