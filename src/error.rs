use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{PolarCondition, SolarEvent};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl Coordinate {
    /// Largest valid magnitude in degrees; the valid range is symmetric.
    pub fn limit(&self) -> f64 {
        match self {
            Coordinate::Latitude => 90.0,
            Coordinate::Longitude => 180.0,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Latitude => f.write_str("latitude"),
            Coordinate::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid {coordinate} {value}° (must be between -{}° and +{}°)", .coordinate.limit(), .coordinate.limit())]
    InvalidLocation { coordinate: Coordinate, value: f64 },

    #[error("{event} is undefined on {date} at latitude {latitude}° ({condition})")]
    UndefinedSolarEvent {
        event: SolarEvent,
        condition: PolarCondition,
        date: NaiveDate,
        latitude: f64,
    },
}

impl Error {
    pub fn is_invalid_location(&self) -> bool {
        matches!(self, Error::InvalidLocation { .. })
    }

    pub fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Error::UndefinedSolarEvent { condition, .. } => Some(*condition),
            Error::InvalidLocation { .. } => None,
        }
    }
}
