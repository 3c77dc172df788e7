//! Command-line configuration for the `sun_times` binary.

use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;

use crate::error::{Error, Result};
use crate::types::{Location, PolarCondition, SolarEvent};

pub const DEFAULT_LATITUDE: f64 = -33.2394434;
pub const DEFAULT_LONGITUDE: f64 = -60.318236;
pub const DEFAULT_UTC_OFFSET: i32 = -3;

#[derive(Debug, Parser)]
#[command(name = "sun_times")]
#[command(about = "Sunrise and sunset times for a location and date")]
#[command(version)]
pub struct Cli {
    /// Latitude in degrees, north positive
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees, east positive
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Fixed offset from UTC in whole hours
    #[arg(long, default_value_t = DEFAULT_UTC_OFFSET, allow_negative_numbers = true)]
    pub utc_offset: i32,

    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Also print the time of solar noon
    #[arg(long)]
    pub noon: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn location(&self) -> Result<Location> {
        Location::new(self.latitude, self.longitude, self.utc_offset)
    }

    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// A solar event time, or the polar condition that leaves it undefined.
pub type EventOutcome = std::result::Result<NaiveTime, PolarCondition>;

pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Splits a calculator result into a reportable outcome: an undefined event
/// becomes its polar condition, any other error is passed back to the caller.
pub fn event_outcome(result: Result<NaiveTime>) -> Result<EventOutcome> {
    match result {
        Ok(time) => Ok(Ok(time)),
        Err(Error::UndefinedSolarEvent { condition, .. }) => Ok(Err(condition)),
        Err(err) => Err(err),
    }
}

/// One report line, e.g. `Sunrise: 07:04:49` or `Sunset: none (polar night)`.
pub fn render_event(event: SolarEvent, outcome: EventOutcome) -> String {
    match outcome {
        Ok(time) => format!("{event}: {}", format_clock_time(time)),
        Err(condition) => format!("{event}: none ({condition})"),
    }
}
