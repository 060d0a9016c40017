use std::str::FromStr;

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

// Unknown zone names fall back to UTC.
fn zone_or_utc(timezone: &str) -> Tz {
    Tz::from_str(timezone).unwrap_or(Tz::UTC)
}

fn time_in_zone(timezone: &str, timestamp: i64) -> DateTime<Tz> {
    let utc = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();
    utc.with_timezone(&zone_or_utc(timezone))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// `DD-MM-YYYY` in the given zone, e.g. `15-07-2023`.
pub fn format_date(timezone: &str, timestamp: i64) -> String {
    time_in_zone(timezone, timestamp)
        .format("%d-%m-%Y")
        .to_string()
}

/// `HH:MM:SS` (24h) in the given zone, e.g. `12:00:45`.
pub fn format_time(timezone: &str, timestamp: i64) -> String {
    time_in_zone(timezone, timestamp)
        .format("%H:%M:%S")
        .to_string()
}

/// `DD-MM-YYYY - HH:MM:SS` in the given zone.
pub fn format_date_time(timezone: &str, timestamp: i64) -> String {
    time_in_zone(timezone, timestamp)
        .format("%d-%m-%Y - %H:%M:%S")
        .to_string()
}

/// Long human-readable form, e.g. `July 15th 2023, 12:00:45`.
pub fn format_date_time_long(timezone: &str, timestamp: i64) -> String {
    let t = time_in_zone(timezone, timestamp);
    format!(
        "{} {}{} {}, {}",
        t.format("%B"),
        t.day(),
        ordinal_suffix(t.day()),
        t.year(),
        t.format("%H:%M:%S")
    )
}

/// Short human-readable form, e.g. `July 15th,Saturday`.
pub fn format_date_short(timezone: &str, timestamp: i64) -> String {
    let t = time_in_zone(timezone, timestamp);
    format!(
        "{} {}{},{}",
        t.format("%B"),
        t.day(),
        ordinal_suffix(t.day()),
        t.format("%A")
    )
}

/// Hour of day (0-23) in the given zone.
pub fn hour_in_zone(timezone: &str, timestamp: i64) -> u32 {
    time_in_zone(timezone, timestamp).hour()
}

/// Parses a `DD-MM-YYYY` date as midnight in the given zone and returns the
/// Unix timestamp in seconds, or -1 when the input does not parse.
pub fn parse_timestamp(timezone: &str, date: &str) -> i64 {
    let tz = zone_or_utc(timezone);
    let parsed = match NaiveDate::parse_from_str(date, "%d-%m-%Y") {
        Ok(d) => d,
        Err(err) => {
            warn!("failed to parse date {date:?}: {err}");
            return -1;
        }
    };
    let midnight = parsed.and_hms_opt(0, 0, 0).unwrap();
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t.timestamp(),
        // Midnight can be skipped or doubled by a DST transition.
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => {
            warn!("midnight does not exist on {date:?} in {timezone:?}");
            -1
        }
    }
}

/// Formats a duration in seconds as `MM:SS`, or `HH:MM:SS` from one hour up.
/// Durations under one second render as `<00:01`, zero and below as `00:00`.
pub fn format_duration(seconds: f64) -> String {
    if seconds <= 0.0 {
        return "00:00".to_string();
    }
    if seconds < 1.0 {
        return "<00:01".to_string();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Compact duration from milliseconds, zero components omitted: `1h 1m 1s`,
/// `1m`, `<1s`. Zero and below render as `0s`.
pub fn format_duration_short_millis(millis: i64) -> String {
    if millis <= 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return "<1s".to_string();
    }
    let total = millis / 1000;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}
