//! Plain-text rendering of a [TripState] along its route.
//!
//! Reads the state only; phase, progress and statuses are never re-derived
//! from dates here.

use std::fmt::Write;

use crate::types::{StopStatus, TripPhase, TripRoute, TripState};

const MIN_WIDTH: usize = 2;

/// Glyph for a stop node on the track.
pub fn status_glyph(status: StopStatus) -> char {
  match status {
    StopStatus::Visited => '●',
    StopStatus::Current => '◉',
    StopStatus::Upcoming => '○',
  }
}

/// Cell index of the moving marker on a track `width` cells wide.
pub fn marker_cell(track_progress: f64, width: usize) -> usize {
  let width = width.max(MIN_WIDTH);
  let cell = (track_progress.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
  cell.min(width - 1)
}

/// Renders a header, a horizontal track with the marker, one line per stop
/// and a mileage summary.
pub fn render_track(route: &TripRoute, state: &TripState, width: usize) -> String {
  let width = width.max(MIN_WIDTH);
  let mut out = String::new();

  let _ = match (state.phase, state.day_of_trip) {
    (TripPhase::During, Some(day)) => writeln!(out, "during: day {} of {}", day, state.total_days),
    (phase, _) => writeln!(out, "{}: {} days", phase, state.total_days),
  };

  let marker = marker_cell(state.track_progress, width);
  let track: String = (0..width)
    .map(|i| match i {
      _ if i == marker => '▲',
      _ if i < marker => '━',
      _ => '─',
    })
    .collect();
  let _ = writeln!(out, "[{}] {:.0}%", track, state.track_progress * 100.0);

  for (stop, status) in route.stops().iter().zip(&state.stop_statuses) {
    let _ = writeln!(
      out,
      "  {} {:<16} {} → {}  {}",
      status_glyph(*status),
      stop.city,
      stop.arrive_date,
      stop.depart_date,
      status
    );
  }

  let _ = write!(
    out,
    "miles: {} / {} ({} to go)",
    state.miles_covered,
    state.total_miles,
    state.miles_remaining()
  );
  out
}
