use chrono::NaiveTime;

use sun_times::clock::*;

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

// ── Minutes / seconds ──

#[test]
fn test_minutes_to_seconds_truncates_toward_zero() {
    assert_eq!(minutes_to_seconds(604.8170769647057), 36289);
    assert_eq!(minutes_to_seconds(0.999), 59);
    assert_eq!(minutes_to_seconds(-360.3171817679189), -21619);
    assert_eq!(minutes_to_seconds(-0.001), 0);
}

#[test]
fn test_minutes_to_seconds_whole_values() {
    assert_eq!(minutes_to_seconds(0.0), 0);
    assert_eq!(minutes_to_seconds(720.0), 43200);
    assert_eq!(minutes_to_seconds(-1.5), -90);
}

#[test]
fn test_minutes_to_seconds_just_below_whole_second() {
    let minutes = (36289.0 - 5e-7) / 60.0;
    assert_eq!(minutes_to_seconds(minutes), 36288);
    // 123 / 60 * 60 lands one ulp short of 123.
    assert_eq!(minutes_to_seconds(seconds_to_minutes(123)), 122);
}

#[test]
fn test_seconds_minutes_roundtrip() {
    for s in [0, 1, 59, 60, 61, 123, 245, 3599, 43200, 86399, -1, -123, -21619] {
        let back = minutes_to_seconds(seconds_to_minutes(s));
        let toward_zero = s - s.signum();
        assert!(back == s || back == toward_zero, "seconds={} back={}", s, back);
    }
}

// ── Seconds → clock time ──

#[test]
fn test_seconds_to_clock_time_known_values() {
    assert_eq!(seconds_to_clock_time(0), hms(0, 0, 0));
    assert_eq!(seconds_to_clock_time(36289), hms(10, 4, 49));
    assert_eq!(seconds_to_clock_time(86399), hms(23, 59, 59));
}

#[test]
fn test_seconds_to_clock_time_wraps() {
    assert_eq!(seconds_to_clock_time(86400), hms(0, 0, 0));
    assert_eq!(seconds_to_clock_time(86400 + 61), hms(0, 1, 1));
    assert_eq!(seconds_to_clock_time(-1), hms(23, 59, 59));
    assert_eq!(seconds_to_clock_time(-21619), hms(17, 59, 41));
    assert_eq!(seconds_to_clock_time(-86400 * 3 - 60), hms(23, 59, 0));
}

// ── UTC offset ──

#[test]
fn test_apply_utc_offset_zero_is_identity() {
    for t in [hms(0, 0, 0), hms(7, 4, 49), hms(23, 59, 59)] {
        assert_eq!(apply_utc_offset(t, 0), t);
    }
}

#[test]
fn test_apply_utc_offset_wraps() {
    assert_eq!(apply_utc_offset(hms(10, 4, 49), -3), hms(7, 4, 49));
    assert_eq!(apply_utc_offset(hms(1, 30, 0), -3), hms(22, 30, 0));
    assert_eq!(apply_utc_offset(hms(22, 0, 0), 3), hms(1, 0, 0));
    assert_eq!(apply_utc_offset(hms(12, 0, 0), 24), hms(12, 0, 0));
    assert_eq!(apply_utc_offset(hms(12, 0, 0), -27), hms(9, 0, 0));
}

#[test]
fn test_apply_utc_offset_inverse() {
    let t = hms(5, 6, 7);
    assert_eq!(apply_utc_offset(apply_utc_offset(t, 3), -3), t);
    assert_eq!(apply_utc_offset(apply_utc_offset(t, -11), 11), t);
}

// ── Composition ──

#[test]
fn test_clock_time_from_minutes() {
    assert_eq!(clock_time_from_minutes(604.8170769647057, -3), hms(7, 4, 49));
    assert_eq!(clock_time_from_minutes(1333.5776351983607, -3), hms(19, 13, 34));
    assert_eq!(clock_time_from_minutes(-360.3171817679189, 12), hms(5, 59, 41));
}
