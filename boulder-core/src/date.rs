//! Appointment date parsing.
//!
//! Dates cross every boundary (file, HTTP, CLI) as `YYYY-MM-DD` text and are
//! held as `NaiveDate` everywhere else.

use chrono::NaiveDate;

use crate::error::{BoulderError, BoulderResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> BoulderResult<NaiveDate> {
    // chrono skips padding whitespace and accepts signed years; the key does not.
    if !has_iso_shape(s) {
        return Err(BoulderError::InvalidDateFormat(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| BoulderError::InvalidDateFormat(s.to_string()))
}

/// Exactly `DDDD-DD-DD` with ASCII digits.
fn has_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
