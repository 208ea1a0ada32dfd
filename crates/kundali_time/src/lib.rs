//! Calendar and time-scale support for birth-chart computation.
//!
//! This crate provides:
//! - Validated civil date-time parsing (`CivilDateTime`)
//! - Gregorian calendar ↔ Julian Day conversion
//! - Greenwich and local mean sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, JulianDay, UNIX_EPOCH_JD, calendar_to_jd,
    jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, gmst_hours, local_sidereal_time_deg};

/// Convert calendar components to a Julian Day, validating every field.
///
/// `JD = ⌊365.25(Y+4716)⌋ + ⌊30.6001(M+1)⌋ + D + B − 1524.5 + (h + m/60)/24`
/// with the usual January/February year shift and Gregorian correction `B`.
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<JulianDay, TimeError> {
    Ok(CivilDateTime::from_components(year, month, day, hour, minute, 0)?.julian_day())
}
