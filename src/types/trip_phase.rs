//! Trip phase relative to the evaluation date.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripPhase {
  Before,
  During,
  After,
}

impl fmt::Display for TripPhase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TripPhase::Before => write!(f, "before"),
      TripPhase::During => write!(f, "during"),
      TripPhase::After => write!(f, "after"),
    }
  }
}
