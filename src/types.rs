use std::fmt;

use chrono::NaiveTime;

use crate::error::{Coordinate, Error, Result};

/// Observer position with a fixed whole-hour UTC offset.
///
/// Construction validates the coordinates, so every `Location` in hand is
/// usable by the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    utc_offset: i32,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, utc_offset: i32) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLocation {
                coordinate: Coordinate::Latitude,
                value: latitude,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLocation {
                coordinate: Coordinate::Longitude,
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            utc_offset,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Hours.
    pub fn utc_offset(&self) -> i32 {
        self.utc_offset
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}°, {:.4}° (UTC{:+})",
            self.latitude, self.longitude, self.utc_offset
        )
    }
}

/// Date-dependent inputs shared by every sunrise/sunset query for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDayParameters {
    /// Fractional year, radians.
    pub gamma: f64,
    /// Radians.
    pub declination: f64,
    /// Minutes.
    pub equation_of_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarEvent::Sunrise => f.write_str("Sunrise"),
            SolarEvent::Sunset => f.write_str("Sunset"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the horizon all day.
    MidnightSun,
    /// The sun stays below the horizon all day.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::MidnightSun => f.write_str("midnight sun"),
            PolarCondition::PolarNight => f.write_str("polar night"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}
