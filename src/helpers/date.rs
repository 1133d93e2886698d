//! Date helper functions
//!
//! Dates coming from the backend are treated as wall-clock calendar dates:
//! the calendar date written in the input is displayed as-is, without any
//! timezone conversion. Input that cannot be parsed is returned verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Extract the calendar date from a date or timestamp string
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and `YYYY-MM-DD HH:MM[:SS]`
/// or `YYYY-MM-DDTHH:MM[:SS]` local timestamps.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    // The offset is kept, not applied: the date as written is the date shown
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    for format in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt.date());
        }
    }

    // Postgres-style offsets such as "+00" that RFC 3339 rejects
    input
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .filter(|_| input.as_bytes().get(10).is_some_and(|b| *b == b'T' || *b == b' '))
}

/// Parse a time-of-day string (`HH:MM` or `HH:MM:SS[.fff]`)
pub fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}

/// "Friday, March 15, 2024"
pub fn format_long_date(input: &str) -> String {
    format_calendar(input, "%A, %B %-d, %Y")
}

/// "March 15, 2024"
pub fn format_full_date(input: &str) -> String {
    format_calendar(input, "%B %-d, %Y")
}

/// "Mar 15, 2024"
pub fn format_short_date(input: &str) -> String {
    format_calendar(input, "%b %-d, %Y")
}

/// 12-hour clock with two-digit minutes, e.g. "2:30 PM"
pub fn format_time_12h(input: &str) -> String {
    match parse_time_of_day(input) {
        Some(time) => time.format("%-I:%M %p").to_string(),
        None => input.to_string(),
    }
}

/// Machine-readable date for `<time datetime="...">`
pub fn date_attr(input: &str) -> String {
    format_calendar(input, "%Y-%m-%d")
}

fn format_calendar(input: &str, format: &str) -> String {
    match parse_calendar_date(input) {
        Some(date) => date.format(format).to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date("2024-03-15"), "Friday, March 15, 2024");
        assert_eq!(format_long_date("2024-01-01"), "Monday, January 1, 2024");
    }

    #[test]
    fn test_short_and_full_date() {
        assert_eq!(format_short_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_full_date("2024-03-05"), "March 5, 2024");
    }

    #[test]
    fn test_timestamp_keeps_written_calendar_date() {
        // No conversion into any local timezone
        assert_eq!(format_short_date("2024-03-15T23:30:00-08:00"), "Mar 15, 2024");
        assert_eq!(format_short_date("2024-03-15T00:30:00+09:00"), "Mar 15, 2024");
        assert_eq!(format_short_date("2024-03-15T10:00:00Z"), "Mar 15, 2024");
        assert_eq!(format_short_date("2024-03-15 10:00:00"), "Mar 15, 2024");
        assert_eq!(format_short_date("2024-03-15T10:00"), "Mar 15, 2024");
        assert_eq!(
            format_short_date("2024-03-15T10:00:00.123456+00"),
            "Mar 15, 2024"
        );
    }

    #[test]
    fn test_unparseable_date_is_verbatim() {
        assert_eq!(format_long_date("soon"), "soon");
        assert_eq!(format_short_date(""), "");
        assert_eq!(format_full_date("2024-13-45"), "2024-13-45");
    }

    #[test]
    fn test_time_12h() {
        assert_eq!(format_time_12h("14:30:00"), "2:30 PM");
        assert_eq!(format_time_12h("09:05"), "9:05 AM");
        assert_eq!(format_time_12h("00:00:00"), "12:00 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
        assert_eq!(format_time_12h("23:59:59.500"), "11:59 PM");
    }

    #[test]
    fn test_unparseable_time_is_verbatim() {
        assert_eq!(format_time_12h("noon"), "noon");
        assert_eq!(format_time_12h("25:00"), "25:00");
    }

    #[test]
    fn test_date_attr() {
        assert_eq!(date_attr("2024-03-15T10:00:00Z"), "2024-03-15");
    }
}
