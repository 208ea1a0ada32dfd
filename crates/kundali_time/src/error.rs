//! Error types for calendar and time-scale conversions.

use thiserror::Error;

/// Errors from calendar validation and Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple is not a valid Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The hour/minute/second triple is not a valid clock time.
    #[error("invalid clock time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// A date or time string could not be parsed.
    #[error("cannot parse {field} from {input:?}: {reason}")]
    Unparseable {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// A Julian Day value is NaN or infinite.
    #[error("Julian Day is not finite: {0}")]
    NonFiniteJulianDay(f64),
}
