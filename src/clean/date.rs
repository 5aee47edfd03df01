//! Date splitting for extract timestamps

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use super::error::CleanError;

/// Timestamp format the extracts use, e.g. "09/03/2018 02:30:00 PM"
const DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// The components the date dimension needs from one timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// 24-hour clock
    pub hour: u32,
    pub date: NaiveDate,
}

/// Split an extract timestamp into its date dimension components
pub fn split_datetime(column: &str, raw: &str) -> Result<DateParts, CleanError> {
    let parsed =
        NaiveDateTime::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| CleanError::Date {
            column: column.to_string(),
            value: raw.to_string(),
            source: e,
        })?;

    Ok(DateParts {
        day: parsed.day(),
        month: parsed.month(),
        year: parsed.year(),
        hour: parsed.hour(),
        date: parsed.date(),
    })
}
