//! Julian Day Number ↔ Gregorian calendar conversion.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// A point on the continuous Julian Day time scale.
///
/// Serialized as a bare number; deserializing rejects non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wrap a raw Julian Day, rejecting NaN and infinities.
    pub fn new(jd: f64) -> Result<Self, TimeError> {
        if jd.is_finite() {
            Ok(Self(jd))
        } else {
            Err(TimeError::NonFiniteJulianDay(jd))
        }
    }

    /// Julian Day of a calendar date whose day already carries the time fraction.
    pub fn from_calendar(year: i32, month: u32, day_frac: f64) -> Self {
        Self(calendar_to_jd(year, month, day_frac))
    }

    /// Raw Julian Day value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        jd_to_centuries(self.0)
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Julian Day (UTC) of a chrono timestamp.
    pub fn from_utc(t: DateTime<Utc>) -> Self {
        let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
        Self(UNIX_EPOCH_JD + secs / 86_400.0)
    }

    /// The current instant from the system clock.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }
}

impl TryFrom<f64> for JulianDay {
    type Error = TimeError;

    fn try_from(jd: f64) -> Result<Self, Self::Error> {
        Self::new(jd)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.0
    }
}

impl Display for JulianDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// Julian centuries since J2000.0 for a raw Julian Day.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Convert a Gregorian calendar date to a Julian Day.
///
/// `day_frac` carries the time of day as a fraction (e.g. 1.5 = noon on the 1st).
/// Uses the proleptic Gregorian calendar for all dates.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Day back to a proleptic Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` includes the time of day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}
