use chrono::{NaiveTime, TimeDelta};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const HOURS_PER_DAY: i32 = 24;

/// Truncates toward zero.
pub fn minutes_to_seconds(minutes: f64) -> i64 {
    (minutes * SECONDS_PER_MINUTE as f64).trunc() as i64
}

pub fn seconds_to_minutes(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_PER_MINUTE as f64
}

/// Time of day `seconds` after UTC midnight, wrapping in both directions.
pub fn seconds_to_clock_time(seconds: i64) -> NaiveTime {
    NaiveTime::MIN + TimeDelta::seconds(seconds.rem_euclid(SECONDS_PER_DAY))
}

pub fn apply_utc_offset(time: NaiveTime, utc_offset: i32) -> NaiveTime {
    time + TimeDelta::hours(utc_offset.rem_euclid(HOURS_PER_DAY) as i64)
}

/// Local clock time for an event `minutes` after UTC midnight.
pub fn clock_time_from_minutes(minutes: f64, utc_offset: i32) -> NaiveTime {
    apply_utc_offset(seconds_to_clock_time(minutes_to_seconds(minutes)), utc_offset)
}
