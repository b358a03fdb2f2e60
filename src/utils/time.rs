//! Time utilities: parsing HH:MM and minute-of-day conversions.
//!
//! Time-of-day values are carried around as `f64` minutes since midnight so
//! fractional minutes survive the projection walk; they are turned back into
//! chrono values only at the output boundary.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse `HH:MM` into minutes since midnight. `24:00` is accepted as end of day.
pub fn parse_minute_of_day(t: &str) -> Option<f64> {
    let t = t.trim();
    if t == "24:00" {
        return Some(MINUTES_PER_DAY);
    }
    parse_time(t).map(minute_of_day)
}

pub fn minute_of_day(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 60.0 + t.nanosecond() as f64 / 60_000_000_000.0
}

/// Combine a date with a (possibly fractional) minute of day.
/// Rounded to the microsecond; `1440.0` lands on the next midnight.
pub fn at_minute(date: NaiveDate, minute: f64) -> NaiveDateTime {
    let micros = (minute * 60_000_000.0).round() as i64;
    date.and_time(NaiveTime::MIN) + Duration::microseconds(micros)
}

/// `HH:MM` for whole minutes, `HH:MM:SS` when a fraction is left over.
pub fn format_minute_of_day(minute: f64) -> String {
    let secs = (minute * 60.0).round() as i64;
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if s == 0 {
        format!("{:02}:{:02}", h, m)
    } else {
        format!("{:02}:{:02}:{:02}", h, m, s)
    }
}

/// `YYYY-MM-DD HH:MM`, with seconds only when they are not zero.
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    if dt.second() == 0 && dt.nanosecond() == 0 {
        dt.format("%Y-%m-%d %H:%M").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
