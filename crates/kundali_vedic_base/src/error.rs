//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// An argument is outside its documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),

    /// A division factor this engine does not define.
    #[error("unsupported division factor D{0}")]
    UnsupportedDivision(u16),

    /// An internal consistency check failed; indicates a logic defect.
    #[error("computation invariant violated: {0}")]
    InvariantViolation(String),
}
