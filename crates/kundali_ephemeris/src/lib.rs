//! Planetary positions and ascendant for a birth instant.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] seam for precise external sources
//! - An HTTP provider with a hard request timeout
//! - A closed-form mean-motion model for all 9 grahas
//! - A [`Resolver`] that tries the provider first and falls back,
//!   recording a [`Provenance`] on every result
//!
//! All longitudes here are tropical; sidereal correction happens downstream.

pub mod error;
pub mod http;
pub mod mean;
pub mod position;
pub mod provider;
pub mod resolver;

pub use error::EphemerisError;
pub use http::{DEFAULT_HOUSE_SYSTEM, DEFAULT_TIMEOUT_MS, HttpEphemeris, HttpEphemerisConfig};
pub use mean::{mean_longitude, mean_positions};
pub use position::{BodyLongitude, TropicalPositions};
pub use provider::EphemerisProvider;
pub use resolver::{Provenance, Resolved, Resolver};
