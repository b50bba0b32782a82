//! Per-stop classification relative to the evaluation date.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-stop classification relative to the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopStatus {
  Visited,
  Current,
  Upcoming,
}

impl fmt::Display for StopStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StopStatus::Visited => write!(f, "visited"),
      StopStatus::Current => write!(f, "current"),
      StopStatus::Upcoming => write!(f, "upcoming"),
    }
  }
}
