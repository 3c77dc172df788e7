use chrono::{Local, NaiveDate, NaiveTime, TimeDelta};
use log::{debug, trace};

use crate::angles;
use crate::clock;
use crate::error::{Error, Result};
use crate::types::{Location, SolarDayParameters, SolarEvent, SunTimes};

/// Sunrise and sunset calculator for a single calendar date.
///
/// The date-dependent terms are computed once in [`SolarTimeCalculator::new`]
/// and reused for every location queried afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTimeCalculator {
    date: NaiveDate,
    params: SolarDayParameters,
}

impl SolarTimeCalculator {
    pub fn new(date: NaiveDate) -> Self {
        let gamma = angles::daily_angle_for(date);
        let params = SolarDayParameters {
            gamma,
            declination: angles::solar_declination(gamma),
            equation_of_time: angles::equation_of_time(gamma),
        };
        debug!(
            "solar parameters for {}: gamma={:.6} rad, declination={:.4}°, eqtime={:.3} min",
            date,
            params.gamma,
            angles::rad_to_deg(params.declination),
            params.equation_of_time
        );
        Self { date, params }
    }

    /// Calculator for the current date of the local clock.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn parameters(&self) -> SolarDayParameters {
        self.params
    }

    fn hour_angle(&self, location: &Location, event: SolarEvent) -> Result<f64> {
        angles::sunrise_hour_angle(location.latitude(), self.params.declination).map_err(
            |condition| Error::UndefinedSolarEvent {
                event,
                condition,
                date: self.date,
                latitude: location.latitude(),
            },
        )
    }

    /// Minutes after UTC midnight, unwrapped.
    pub fn sunrise_minutes(&self, location: &Location) -> Result<f64> {
        let ha = self.hour_angle(location, SolarEvent::Sunrise)?;
        let minutes =
            angles::sunrise_minutes(location.longitude(), ha, self.params.equation_of_time);
        trace!("sunrise at {location}: hour angle {ha:.4}°, {minutes:.3} min UTC");
        Ok(minutes)
    }

    /// Minutes after UTC midnight, unwrapped.
    pub fn sunset_minutes(&self, location: &Location) -> Result<f64> {
        let ha = self.hour_angle(location, SolarEvent::Sunset)?;
        let minutes =
            angles::sunset_minutes(location.longitude(), ha, self.params.equation_of_time);
        trace!("sunset at {location}: hour angle {ha:.4}°, {minutes:.3} min UTC");
        Ok(minutes)
    }

    pub fn sunrise(&self, location: &Location) -> Result<NaiveTime> {
        let minutes = self.sunrise_minutes(location)?;
        Ok(clock::clock_time_from_minutes(minutes, location.utc_offset()))
    }

    pub fn sunset(&self, location: &Location) -> Result<NaiveTime> {
        let minutes = self.sunset_minutes(location)?;
        Ok(clock::clock_time_from_minutes(minutes, location.utc_offset()))
    }

    pub fn event(&self, location: &Location, event: SolarEvent) -> Result<NaiveTime> {
        match event {
            SolarEvent::Sunrise => self.sunrise(location),
            SolarEvent::Sunset => self.sunset(location),
        }
    }

    pub fn sun_times(&self, location: &Location) -> Result<SunTimes> {
        Ok(SunTimes {
            sunrise: self.sunrise(location)?,
            sunset: self.sunset(location)?,
        })
    }

    /// Local time of solar noon, defined even when the sun never rises or sets.
    pub fn solar_noon(&self, location: &Location) -> NaiveTime {
        let minutes =
            angles::solar_noon_minutes(location.longitude(), self.params.equation_of_time);
        clock::clock_time_from_minutes(minutes, location.utc_offset())
    }

    /// Time between sunrise and sunset, truncated to whole seconds.
    pub fn day_length(&self, location: &Location) -> Result<TimeDelta> {
        let ha = self.hour_angle(location, SolarEvent::Sunrise)?;
        let minutes = 2.0 * angles::MINUTES_PER_DEGREE * ha;
        Ok(TimeDelta::seconds(clock::minutes_to_seconds(minutes)))
    }
}
