// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Parse the date portion of an ISO 8601 timestamp.
///
/// Strava start dates look like "2024-01-15T10:30:00Z"; only the first ten
/// characters matter here. Returns `None` for anything too short or malformed.
pub fn parse_start_date(start_date: &str) -> Option<NaiveDate> {
    start_date.get(..10)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-17 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert_eq!(week_start_of(date), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        // A Monday maps to itself
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(week_start_of(monday), monday);

        // A Sunday maps back to the previous Monday
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        assert_eq!(week_start_of(sunday), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date("2024-01-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_start_date("2024-01-15"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parse_start_date("2024-01"), None);
        assert_eq!(parse_start_date("not a date"), None);
    }
}
