//! CLI: print where the travelers are along a trip route.
//!
//! Usage: `trip_progress [OPTIONS] <trip-config.json>`
//! Example: trip_progress --date 2026-06-16 tests/fixtures/east_coast.json
//!
//! Set RUST_LOG=trip_progress=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};
use trip_progress::calendar_day::{parse_calendar_date, today};
use trip_progress::render::render_track;
use trip_progress::{CalendarDate, TripState, load_trip_config, resolve, resolve_range};

const DATE_ENV: &str = "TRIP_PROGRESS_DATE";

/// Print where the travelers are along a trip route.
#[derive(Parser, Debug)]
#[command(name = "trip_progress")]
#[command(
  after_help = r#"Environment variables (override --date when set):
  TRIP_PROGRESS_DATE   Evaluation date (YYYY-MM-DD).

Examples:
  trip_progress trip.json
  trip_progress --date 2026-06-12 --through 2026-06-20 trip.json
  trip_progress --json --date 2026-06-16 trip.json"#
)]
struct Args {
  /// Evaluation date (YYYY-MM-DD). Overridden by TRIP_PROGRESS_DATE if set. Default: today
  #[arg(long, value_name = "DATE")]
  date: Option<String>,

  /// Print one state per day from --date through this date (inclusive)
  #[arg(long, value_name = "DATE")]
  through: Option<String>,

  /// Print states as JSON, one document per line
  #[arg(long)]
  json: bool,

  /// Track width in cells for the text view
  #[arg(long, value_name = "N", default_value_t = 40)]
  width: usize,

  /// Path to the trip configuration JSON file
  #[arg(value_name = "trip-config.json")]
  config_path: PathBuf,
}

fn parse_or_exit(s: &str) -> CalendarDate {
  match parse_calendar_date(s) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Env var overrides the flag; only this caller reads the clock.
  let date = match env::var(DATE_ENV).ok().or_else(|| args.date.clone()) {
    Some(s) => parse_or_exit(&s),
    None => today(),
  };
  let through = args.through.as_deref().map(parse_or_exit).unwrap_or(date);

  let route = match load_trip_config(&args.config_path) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Error loading {}: {}", args.config_path.display(), e);
      process::exit(1);
    }
  };
  info!(stops = route.stops().len(), %date, %through, "trip loaded");

  let states: Vec<(CalendarDate, TripState)> = if through > date {
    resolve_range(&route, date, through)
  } else {
    vec![(date, resolve(&route, date))]
  };

  for (i, (day, state)) in states.iter().enumerate() {
    if args.json {
      match serde_json::to_string(state) {
        Ok(json) => println!("{}", json),
        Err(e) => {
          eprintln!("Error encoding state: {}", e);
          process::exit(1);
        }
      }
    } else {
      if i > 0 {
        println!();
      }
      println!("{}", day);
      println!("{}", render_track(&route, state, args.width));
    }
  }
}
