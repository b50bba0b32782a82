//! Trip configuration load/save (JSON).

use crate::types::{TripConfig, TripConfigError, TripRoute};
use std::path::Path;
use tracing::instrument;

/// Default filename for a trip configuration.
pub const TRIP_CONFIG_FILENAME: &str = "trip.json";

/// Loads and validates a trip configuration from `path`.
#[instrument(level = "trace", skip(path), fields(path = %path.display()))]
pub fn load_trip_config(path: &Path) -> Result<TripRoute, TripConfigError> {
  let bytes = std::fs::read(path)?;
  let config: TripConfig = serde_json::from_slice(&bytes)?;
  config.into_route()
}

/// Saves `config` to `path` as pretty JSON, creating parent directories.
#[instrument(level = "trace", skip(path, config))]
pub fn save_trip_config(path: &Path, config: &TripConfig) -> Result<(), TripConfigError> {
  let json = serde_json::to_string_pretty(config)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}
