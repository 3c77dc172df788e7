pub mod angles;
pub mod calculator;
pub mod cli;
pub mod clock;
pub mod error;
pub mod types;

pub use angles::{
    daily_angle, daily_angle_for, deg_to_rad, equation_of_time, hour_angle_cosine, leap_year,
    rad_to_deg, solar_declination, solar_noon_minutes, sunrise_hour_angle, sunrise_minutes,
    sunset_minutes, MINUTES_AT_NOON, MINUTES_PER_DEGREE, RISE_SET_ZENITH_DEG,
};

pub use calculator::SolarTimeCalculator;

pub use clock::{
    apply_utc_offset, clock_time_from_minutes, minutes_to_seconds, seconds_to_clock_time,
    seconds_to_minutes,
};

pub use error::{Coordinate, Error, Result};

pub use types::{Location, PolarCondition, SolarDayParameters, SolarEvent, SunTimes};
