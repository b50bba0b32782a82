//! Trip state resolver: where the travelers are along the route on a given day.
//!
//! Pure function of the stop list, the mileage table and the evaluation date.
//! The only clock read is in [resolve_today].

use tracing::{error, instrument};

use crate::calendar_day::{day_difference, today};
use crate::mileage::LegMileageTable;
use crate::types::{CalendarDate, Stop, StopStatus, TripPhase, TripRoute, TripState};

/// Resolves the trip state for `date`.
#[instrument(level = "trace", skip(route), fields(stops = route.stops().len()))]
pub fn resolve(route: &TripRoute, date: CalendarDate) -> TripState {
  resolve_stops(route.stops(), route.mileage(), date)
}

/// Resolves the trip state for the current local calendar day.
pub fn resolve_today(route: &TripRoute) -> TripState {
  resolve(route, today())
}

/// One state per day from `from` through `through`, inclusive. Empty when
/// `from > through`.
#[instrument(level = "trace", skip(route))]
pub fn resolve_range(
  route: &TripRoute,
  from: CalendarDate,
  through: CalendarDate,
) -> Vec<(CalendarDate, TripState)> {
  from
    .iter_days()
    .take_while(|d| *d <= through)
    .map(|d| (d, resolve(route, d)))
    .collect()
}

/// Resolver over a raw stop list. `stops` must be non-empty and `mileage` must
/// have one entry per stop; [TripRoute] guarantees both.
pub(crate) fn resolve_stops(
  stops: &[Stop],
  mileage: &LegMileageTable,
  date: CalendarDate,
) -> TripState {
  let n = stops.len();
  let trip_start = stops[0].arrive_date;
  let trip_end = stops[n - 1].depart_date;
  let total_days = day_difference(trip_start, trip_end);
  let total_miles = mileage.total_miles();

  if date < trip_start {
    return TripState {
      phase: TripPhase::Before,
      current_stop_index: -1,
      track_progress: 0.0,
      day_of_trip: None,
      total_days,
      miles_covered: 0,
      total_miles,
      stop_statuses: vec![StopStatus::Upcoming; n],
    };
  }

  if date >= trip_end {
    return TripState {
      phase: TripPhase::After,
      current_stop_index: n as i64,
      track_progress: 1.0,
      day_of_trip: None,
      total_days,
      miles_covered: total_miles,
      total_miles,
      stop_statuses: vec![StopStatus::Visited; n],
    };
  }

  let day_of_trip = day_difference(trip_start, date) + 1;
  let during = |index: usize,
                track_progress: f64,
                miles_covered: u32,
                stop_statuses: Vec<StopStatus>| TripState {
    phase: TripPhase::During,
    current_stop_index: index as i64,
    track_progress,
    day_of_trip: Some(day_of_trip),
    total_days,
    miles_covered,
    total_miles,
    stop_statuses,
  };

  match locate(stops, date) {
    Some(Position::AtStop(i)) => during(
      i,
      route_fraction(i as f64, n),
      mileage.miles_at(i),
      statuses(n, |j| {
        if j < i {
          StopStatus::Visited
        } else if j == i {
          StopStatus::Current
        } else {
          StopStatus::Upcoming
        }
      }),
    ),
    Some(Position::InTransit { from, frac }) => {
      let start = mileage.miles_at(from);
      let leg = mileage.miles_at(from + 1).saturating_sub(start);
      let miles = (f64::from(start) + f64::from(leg) * frac).round() as u32;
      during(
        from,
        route_fraction(from as f64 + frac, n),
        miles,
        statuses(n, |j| {
          if j <= from {
            StopStatus::Visited
          } else {
            StopStatus::Upcoming
          }
        }),
      )
    }
    None => {
      error!(%date, %trip_start, %trip_end, "no stop or leg matched a date inside the trip");
      during(0, 0.0, 0, vec![StopStatus::Upcoming; n])
    }
  }
}

/// Where `date` falls inside the trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Position {
  /// Occupying stop `i`.
  AtStop(usize),
  /// Between stop `from` and `from + 1`, `frac` of the way along.
  InTransit { from: usize, frac: f64 },
}

/// Scans stops in route order for the at-city or in-transit window holding
/// `date`. The first match wins.
pub(crate) fn locate(stops: &[Stop], date: CalendarDate) -> Option<Position> {
  for (i, stop) in stops.iter().enumerate() {
    if stop.is_occupied_on(date) {
      return Some(Position::AtStop(i));
    }
    if let Some(next) = stops.get(i + 1) {
      if stop.depart_date <= date && date < next.arrive_date {
        return Some(Position::InTransit {
          from: i,
          frac: leg_fraction(stop.depart_date, next.arrive_date, date),
        });
      }
    }
  }
  None
}

/// Whole-day fraction of the way from `depart` to `arrive`. A same-day transfer
/// collapses to the moment of departure.
pub(crate) fn leg_fraction(depart: CalendarDate, arrive: CalendarDate, date: CalendarDate) -> f64 {
  let span = day_difference(depart, arrive);
  if span > 0 {
    day_difference(depart, date) as f64 / span as f64
  } else {
    0.0
  }
}

fn route_fraction(position: f64, n: usize) -> f64 {
  if n > 1 {
    position / (n - 1) as f64
  } else {
    0.0
  }
}

fn statuses(n: usize, f: impl Fn(usize) -> StopStatus) -> Vec<StopStatus> {
  (0..n).map(f).collect()
}
