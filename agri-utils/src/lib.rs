//! Shared utility functions for the agricultural dashboard crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate the way the dashboard shows dates: "M/D/YYYY"
    pub fn format_short_date(date: &NaiveDate) -> String {
        date.format("%-m/%-d/%Y").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse an ISO-8601 timestamp down to its calendar date.
    ///
    /// Accepts RFC 3339 (`2024-06-01T10:00:00Z`, `2024-06-01T10:00:00+02:00`),
    /// offset-less date-times (`2024-06-01T10:00:00`, optionally with fractional
    /// seconds) and plain dates (`2024-06-01`). Offsets are kept as given, so the
    /// calendar date is the one written in the timestamp.
    pub fn parse_timestamp_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(dt.date());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
            return Ok(dt.date());
        }
        if let Ok(date) = parse_date(s) {
            return Ok(date);
        }
        Err(DateError(format!("unrecognised timestamp '{}'", s)).into())
    }

    /// Render an ISO-8601 timestamp as a short display date.
    ///
    /// Unparseable input is returned unchanged so a bad timestamp never blanks
    /// a label.
    pub fn display_date(timestamp: &str) -> String {
        match parse_timestamp_date(timestamp) {
            Ok(date) => format_short_date(&date),
            Err(_) => timestamp.to_string(),
        }
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
