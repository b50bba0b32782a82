//! # trip-progress
//!
//! Derives where travelers currently are along a fixed, multi-stop trip route.
//!
//! ## Architecture
//!
//! Static trip configuration (stops + per-leg mileage) is loaded and validated
//! once into a [TripRoute]. The resolver is a pure function of that route and
//! a calendar day, producing a [TripState]: the trip phase, per-stop
//! visited/current/upcoming statuses, a continuous 0..1 position along the
//! route and the miles covered. Renderers read the state and never re-derive
//! it from dates.
//!
//! - [calendar_day]: ISO date parsing and whole-day arithmetic.
//! - [mileage]: per-leg distances and their running totals.
//! - [validate_route]: configuration-time checks.
//! - [resolver]: the state derivation.
//! - [render]: a text consumer of [TripState].

pub mod calendar_day;
#[cfg(test)]
mod calendar_day_test;
pub mod mileage;
pub mod render;
pub mod resolver;
pub mod trip_config_io;
#[cfg(test)]
mod trip_config_io_test;
pub mod types;
pub mod validate_route;

pub use resolver::{resolve, resolve_range, resolve_today};
pub use trip_config_io::load_trip_config;
pub use types::{CalendarDate, Stop, StopStatus, TripConfig, TripPhase, TripRoute, TripState};
