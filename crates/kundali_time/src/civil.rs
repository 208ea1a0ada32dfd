//! Validated civil (local clock) date-time and its Julian Day.
//!
//! The caller supplies clock time already normalized to the convention the
//! downstream ephemeris expects; no time-zone arithmetic happens here.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::JulianDay;

/// A Gregorian calendar date with a clock time, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl CivilDateTime {
    /// Build from already-parsed chrono values.
    pub const fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Build from raw components, rejecting impossible dates and times.
    pub fn from_components(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimeError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Ok(Self { date, time })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` (or `HH:MM:SS`).
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let parsed_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
            TimeError::Unparseable {
                field: "date",
                input: date.to_string(),
                reason: e.to_string(),
            }
        })?;
        let trimmed = time.trim();
        let parsed_time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map_err(|e| TimeError::Unparseable {
                field: "time",
                input: time.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(parsed_date, parsed_time))
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Fraction of the day elapsed at the clock time: `(h + m/60 + s/3600) / 24`.
    pub fn day_fraction(&self) -> f64 {
        let hours = self.time.hour() as f64
            + self.time.minute() as f64 / 60.0
            + self.time.second() as f64 / 3600.0;
        hours / 24.0
    }

    /// Julian Day of this instant on the caller's time scale.
    pub fn julian_day(&self) -> JulianDay {
        let day_frac = self.date.day() as f64 + self.day_fraction();
        JulianDay::from_calendar(self.date.year(), self.date.month(), day_frac)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date.format("%Y-%m-%d"), self.time.format("%H:%M:%S"))
    }
}
