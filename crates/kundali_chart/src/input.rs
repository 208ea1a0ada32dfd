//! The birth record a chart is computed from.

use kundali_time::{CivilDateTime, JulianDay};
use kundali_vedic_base::validate_location;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Date, clock time and place of birth.
///
/// The clock time must already be on the time scale the ephemeris expects
/// (UT for the built-in models); no zone conversion happens here. `name`
/// and `place` are labels only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub datetime: CivilDateTime,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl BirthInput {
    pub fn new(datetime: CivilDateTime, latitude: f64, longitude: f64) -> Result<Self, ChartError> {
        let input = Self {
            datetime,
            latitude,
            longitude,
            name: None,
            place: None,
        };
        input.validate()?;
        Ok(input)
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]`.
    pub fn parse(date: &str, time: &str, latitude: f64, longitude: f64) -> Result<Self, ChartError> {
        Self::new(CivilDateTime::parse(date, time)?, latitude, longitude)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        validate_location(self.latitude, self.longitude).map_err(ChartError::from)
    }

    pub fn julian_day(&self) -> JulianDay {
        self.datetime.julian_day()
    }
}
