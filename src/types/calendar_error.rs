//! Error for malformed calendar-day strings.

use thiserror::Error;

/// A date string that is not a valid ISO `YYYY-MM-DD` calendar day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid calendar day; YYYY-MM-DD format is expected")]
pub struct CalendarError {
  pub input: String,
}
