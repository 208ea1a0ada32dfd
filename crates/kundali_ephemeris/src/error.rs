//! Failures of the primary ephemeris path.
//!
//! All of these are recoverable: the resolvers turn them into a fallback
//! provenance instead of returning them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("no ephemeris provider configured")]
    NotConfigured,

    #[error("invalid provider config: {0}")]
    InvalidConfig(&'static str),

    #[error("ephemeris request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("ephemeris transport error: {0}")]
    Transport(String),

    #[error("ephemeris service returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed ephemeris response: {0}")]
    MalformedResponse(String),
}
