//! Trip route types: the static stop list consumed by the resolver and the
//! [TripState] it derives.
//!
//! A [TripConfig] is raw configuration as loaded from disk; a [TripRoute] is the
//! same data after validation and is the only thing the resolver accepts.

mod calendar_error;
mod stop;
#[cfg(test)]
mod stop_test;
mod stop_status;
mod trip_config;
mod trip_config_error;
mod trip_phase;
mod trip_state;

pub use calendar_error::CalendarError;
pub use stop::Stop;
pub use stop_status::StopStatus;
pub use trip_config::{TripConfig, TripRoute};
pub use trip_config_error::TripConfigError;
pub use trip_phase::TripPhase;
pub use trip_state::TripState;

/// A local-naive calendar day. The engine has no time-of-day resolution.
pub type CalendarDate = chrono::NaiveDate;
