use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    #[error("second must be in 0..59")]
    LeapSecond,
}

/// Hour of day for a `MM/DD/YYYY HH:MM:SS` timestamp, taken as written.
pub fn parse_hour(timestamp: &str) -> Result<u32, TimestampError> {
    let ts = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)?;
    // chrono keeps a parsed `:60` in the nanosecond field.
    if ts.nanosecond() >= 1_000_000_000 {
        return Err(TimestampError::LeapSecond);
    }
    Ok(ts.hour())
}
