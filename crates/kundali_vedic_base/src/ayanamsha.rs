//! Sidereal correction (ayanamsa).
//!
//! `sidereal = (tropical − ayanamsa) mod 360`. The default is a fixed
//! 24.0° constant; named systems take their J2000.0 reference value and add
//! the IAU 2006 general precession in longitude.

use std::fmt::{Display, Formatter};

use kundali_time::JulianDay;
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Fixed ayanamsa used when nothing else is configured.
pub const DEFAULT_AYANAMSA_DEG: f64 = 24.0;

/// How the ayanamsa for a chart is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "degrees", rename_all = "lowercase")]
pub enum Ayanamsa {
    /// A constant offset in degrees, independent of epoch.
    Fixed(f64),
    /// Chitrapaksha: Spica at 0° Libra.
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    Krishnamurti,
}

impl Default for Ayanamsa {
    fn default() -> Self {
        Self::Fixed(DEFAULT_AYANAMSA_DEG)
    }
}

impl Ayanamsa {
    /// Reference value at J2000.0, in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Fixed(deg) => deg,
            Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Lahiri => "lahiri",
            Self::Raman => "raman",
            Self::Krishnamurti => "krishnamurti",
        }
    }

    /// Ayanamsa in degrees at the given instant.
    pub fn degrees_at(self, jd: JulianDay) -> f64 {
        match self {
            Self::Fixed(deg) => deg,
            named => {
                named.reference_j2000_deg()
                    + general_precession_arcsec(jd.centuries_since_j2000()) / 3600.0
            }
        }
    }

    /// Tropical to sidereal longitude at `jd`.
    pub fn apply(self, tropical_deg: f64, jd: JulianDay) -> f64 {
        to_sidereal(tropical_deg, self.degrees_at(jd))
    }
}

impl Display for Ayanamsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(deg) => write!(f, "fixed {deg}°"),
            other => f.write_str(other.name()),
        }
    }
}

/// `(tropical − ayanamsa) mod 360`.
pub fn to_sidereal(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// `t` is Julian centuries since J2000.0. Leading term ≈ 1.397°/century.
pub fn general_precession_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}
