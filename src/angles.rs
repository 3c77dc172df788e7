use chrono::{Datelike, NaiveDate};

use crate::types::PolarCondition;

/// Zenith angle of the sun's centre at sunrise and sunset: 90° plus
/// standard refraction and the solar semi-diameter.
pub const RISE_SET_ZENITH_DEG: f64 = 90.833;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const MINUTES_AT_NOON: f64 = 720.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

/// Fractional year in radians for a 1-based day of year.
pub fn daily_angle(day_of_year: u32, leap: bool) -> f64 {
    let days = if leap { 366.0 } else { 365.0 };
    2.0 * std::f64::consts::PI / days * (day_of_year as f64 - 1.0)
}

pub fn daily_angle_for(date: NaiveDate) -> f64 {
    daily_angle(date.ordinal(), leap_year(date.year()))
}

/// Solar declination in radians.
pub fn solar_declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Cosine of the sunrise/sunset hour angle. Values outside [-1, 1] mean the
/// sun never crosses the rise/set zenith on that day.
pub fn hour_angle_cosine(latitude: f64, declination: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let zenith = deg_to_rad(RISE_SET_ZENITH_DEG);
    zenith.cos() / (lat_rad.cos() * declination.cos()) - lat_rad.tan() * declination.tan()
}

/// Sunrise/sunset hour angle in degrees, or the polar condition that
/// prevents one from existing.
pub fn sunrise_hour_angle(latitude: f64, declination: f64) -> Result<f64, PolarCondition> {
    let cos_h = hour_angle_cosine(latitude, declination);
    if (-1.0..=1.0).contains(&cos_h) {
        Ok(rad_to_deg(cos_h.acos()))
    } else if cos_h < -1.0 {
        Err(PolarCondition::MidnightSun)
    } else {
        Err(PolarCondition::PolarNight)
    }
}

pub fn solar_noon_minutes(longitude: f64, eot: f64) -> f64 {
    MINUTES_AT_NOON - MINUTES_PER_DEGREE * longitude - eot
}

pub fn sunrise_minutes(longitude: f64, hour_angle: f64, eot: f64) -> f64 {
    MINUTES_AT_NOON - MINUTES_PER_DEGREE * (longitude + hour_angle) - eot
}

pub fn sunset_minutes(longitude: f64, hour_angle: f64, eot: f64) -> f64 {
    MINUTES_AT_NOON - MINUTES_PER_DEGREE * (longitude - hour_angle) - eot
}
