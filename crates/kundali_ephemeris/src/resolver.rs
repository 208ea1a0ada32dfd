//! Two-stage resolution: ask the provider, fall back to closed-form models.
//!
//! Fallback is never silent. Every result carries a [`Provenance`], and
//! each primary failure is logged with its reason.

use kundali_time::JulianDay;
use kundali_vedic_base::{VedicError, ascendant_tropical_deg, validate_location};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EphemerisError;
use crate::mean::mean_positions;
use crate::position::TropicalPositions;
use crate::provider::EphemerisProvider;

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Provenance {
    Primary { provider: String },
    Fallback { reason: String },
}

impl Provenance {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    fn fallback(err: &EphemerisError) -> Self {
        Self::Fallback {
            reason: err.to_string(),
        }
    }
}

/// A value together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub value: T,
    pub provenance: Provenance,
}

/// Per-request resolver, owning an optional primary provider.
pub struct Resolver {
    provider: Option<Box<dyn EphemerisProvider>>,
}

impl Resolver {
    pub fn new(provider: Option<Box<dyn EphemerisProvider>>) -> Self {
        Self { provider }
    }

    /// Resolver that uses the closed-form models only.
    pub fn fallback_only() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: impl EphemerisProvider + 'static) -> Self {
        Self {
            provider: Some(Box::new(provider)),
        }
    }

    fn primary(&self) -> Result<&dyn EphemerisProvider, EphemerisError> {
        self.provider.as_deref().ok_or(EphemerisError::NotConfigured)
    }

    /// Tropical positions of the 9 grahas. Always succeeds.
    pub fn resolve_positions(&self, jd: JulianDay) -> Resolved<TropicalPositions> {
        let attempt = self
            .primary()
            .and_then(|p| p.tropical_positions(jd).map(|v| (p.name(), v)));
        match attempt {
            Ok((provider, value)) => {
                debug!(provider, %jd, "positions from primary provider");
                Resolved {
                    value,
                    provenance: Provenance::Primary {
                        provider: provider.to_string(),
                    },
                }
            }
            Err(e) => {
                log_fallback("positions", &e);
                Resolved {
                    value: mean_positions(jd),
                    provenance: Provenance::fallback(&e),
                }
            }
        }
    }

    /// Tropical ascendant, degrees in [0, 360).
    ///
    /// Location errors are reported before any provider call. A failing
    /// fallback formula is an error, never a default value.
    pub fn resolve_ascendant(
        &self,
        jd: JulianDay,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Resolved<f64>, VedicError> {
        validate_location(latitude_deg, longitude_deg)?;
        let attempt = self.primary().and_then(|p| {
            p.tropical_ascendant(jd, latitude_deg, longitude_deg)
                .map(|v| (p.name(), v))
        });
        match attempt {
            Ok((provider, value)) => Ok(Resolved {
                value,
                provenance: Provenance::Primary {
                    provider: provider.to_string(),
                },
            }),
            Err(e) => {
                log_fallback("ascendant", &e);
                Ok(Resolved {
                    value: ascendant_tropical_deg(jd, latitude_deg, longitude_deg)?,
                    provenance: Provenance::fallback(&e),
                })
            }
        }
    }
}

fn log_fallback(what: &'static str, e: &EphemerisError) {
    match e {
        EphemerisError::NotConfigured => debug!(what, "no provider, using mean-motion model"),
        _ => warn!(%e, what, "ephemeris unavailable, using fallback model"),
    }
}
