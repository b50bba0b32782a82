//! Calendar-day arithmetic.
//!
//! Dates are local-naive calendar days. Nothing here looks at time-of-day, so a
//! state evaluated mid-afternoon reads the same as one at midnight.

use chrono::{Datelike, Local, NaiveDate};
use tracing::instrument;

use crate::types::{CalendarDate, CalendarError};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` string into a calendar day.
#[instrument(level = "trace")]
pub fn parse_calendar_date(s: &str) -> Result<CalendarDate, CalendarError> {
  NaiveDate::parse_from_str(s.trim(), ISO_DATE).map_err(|_| CalendarError {
    input: s.to_string(),
  })
}

/// Comparable integer day count for an ISO `YYYY-MM-DD` string.
pub fn to_ordinal_day(s: &str) -> Result<i64, CalendarError> {
  parse_calendar_date(s).map(ordinal_day)
}

/// Days since 0001-01-01 (day 1 of the common era is 1).
pub fn ordinal_day(date: CalendarDate) -> i64 {
  i64::from(date.num_days_from_ce())
}

/// Whole days from `a` to `b`; negative when `b` precedes `a`.
pub fn day_difference(a: CalendarDate, b: CalendarDate) -> i64 {
  ordinal_day(b) - ordinal_day(a)
}

/// The current local calendar day. The only clock read in the crate.
pub fn today() -> CalendarDate {
  Local::now().date_naive()
}
