//! Date display helpers
//!
//! The API hands out timestamps as strings: `createdAt` is RFC 3339 and
//! `visitDate` is whatever the date input produced (`YYYY-MM-DD`) or an RFC
//! 3339 timestamp once the server has normalised it.

use chrono::{DateTime, NaiveDate};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

/// Parses either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Formats a date for display, leaving unparseable input untouched.
pub fn display_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
