//! Error types for chart assembly.

use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Coordinates or other birth fields are out of range.
    #[error("invalid birth data: {0}")]
    InvalidBirthData(String),

    /// Date or time could not be parsed or does not exist.
    #[error("invalid birth data: {0}")]
    Time(#[from] TimeError),

    /// A computed value broke a structural guarantee. Always a defect.
    #[error("computation invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Vedic(VedicError),
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvariantViolation(msg) => Self::Invariant(msg),
            VedicError::InvalidLocation(msg) => Self::InvalidBirthData(msg.to_string()),
            other => Self::Vedic(other),
        }
    }
}
