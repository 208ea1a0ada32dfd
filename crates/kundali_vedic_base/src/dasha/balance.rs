//! Dasha balance at birth, from the Moon's nakshatra.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::vimshottari::full_years;

/// How much of the first Mahadasha remains at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthBalance {
    /// Moon's nakshatra at birth.
    pub nakshatra: Nakshatra,
    /// Lord of that nakshatra, which rules the first Mahadasha.
    pub lord: Graha,
    /// Fraction of the nakshatra the Moon had already crossed, [0, 1).
    pub elapsed_fraction: f64,
    /// Full length of the lord's Mahadasha, years.
    pub full_years: f64,
    /// `full_years · (1 − elapsed_fraction)`.
    pub remaining_years: f64,
}

/// Birth balance for a sidereal Moon longitude.
///
/// `index = ⌊lon·27/360⌋ mod 27` picks the lord; the fractional part of
/// `lon·27/360` is the elapsed share of that lord's Mahadasha.
pub fn birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = nak.nakshatra.lord();
    let full = full_years(lord);
    BirthBalance {
        nakshatra: nak.nakshatra,
        lord,
        elapsed_fraction: nak.elapsed_fraction,
        full_years: full,
        remaining_years: full * (1.0 - nak.elapsed_fraction),
    }
}
