//! Equal-house (bhava) assignment from the sidereal Lagna.
//!
//! House 1 starts at the ascendant degree and every house spans 30°:
//! `house = ⌊((lon − asc) mod 360) / 30⌋ + 1`.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// A single equal house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Start of the house (its cusp) in degrees, [0, 360).
    pub start_deg: f64,
    /// End of the house in degrees, [0, 360). Equals the next house's start.
    pub end_deg: f64,
}

/// House number of a body given the ascendant, both sidereal degrees.
///
/// Always in 1..=12 for finite input.
pub fn house_of(longitude_deg: f64, ascendant_deg: f64) -> u8 {
    let offset = normalize_360(longitude_deg - ascendant_deg);
    ((offset / 30.0).floor() as u8).min(11) + 1
}

/// Like [`house_of`] but rejects non-finite input and checks the range.
pub fn house_of_checked(longitude_deg: f64, ascendant_deg: f64) -> Result<u8, VedicError> {
    if !longitude_deg.is_finite() || !ascendant_deg.is_finite() {
        return Err(VedicError::InvalidInput("house placement needs finite longitudes"));
    }
    let house = house_of(longitude_deg, ascendant_deg);
    if !(1..=12).contains(&house) {
        return Err(VedicError::InvariantViolation(format!(
            "house {house} outside 1..=12 for lon {longitude_deg}, asc {ascendant_deg}"
        )));
    }
    Ok(house)
}

/// The 12 equal houses starting at the ascendant.
pub fn equal_houses(ascendant_deg: f64) -> [Bhava; 12] {
    std::array::from_fn(|i| Bhava {
        number: i as u8 + 1,
        start_deg: normalize_360(ascendant_deg + i as f64 * 30.0),
        end_deg: normalize_360(ascendant_deg + (i as f64 + 1.0) * 30.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_degrees_after_ascendant_is_fourth_house() {
        assert_eq!(house_of(100.0, 10.0), 4);
    }

    #[test]
    fn ascendant_degree_is_first_house() {
        assert_eq!(house_of(123.4, 123.4), 1);
    }

    #[test]
    fn wraps_behind_ascendant() {
        assert_eq!(house_of(5.0, 10.0), 12);
        assert_eq!(house_of(359.0, 340.0), 1);
        assert_eq!(house_of(0.0, 340.0), 1);
        assert_eq!(house_of(10.0, 340.0), 2);
    }

    #[test]
    fn checked_rejects_nan() {
        assert!(house_of_checked(f64::NAN, 0.0).is_err());
        assert_eq!(house_of_checked(200.0, 20.0), Ok(7));
    }

    #[test]
    fn equal_houses_chain() {
        let houses = equal_houses(350.0);
        assert_eq!(houses[0].number, 1);
        assert!((houses[1].start_deg - 20.0).abs() < 1e-12);
        for w in houses.windows(2) {
            assert!((w[0].end_deg - w[1].start_deg).abs() < 1e-12);
        }
        assert!((houses[11].end_deg - 350.0).abs() < 1e-12);
    }
}
