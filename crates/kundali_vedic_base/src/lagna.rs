//! Lagna (Ascendant) and MC from local sidereal time.
//!
//! Standard spherical astronomy with the J2000.0 mean obliquity:
//! `Asc = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))` and
//! `MC = atan2(sin θ, cos θ cos ε)`, θ = LST, φ = geographic latitude.
//! Results are tropical; subtract an ayanamsa for the sidereal Lagna.

use kundali_time::{JulianDay, local_sidereal_time_deg};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0, degrees (IAU 2006: 84381.406″).
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Check that a geographic coordinate pair is finite and in range.
pub fn validate_location(latitude_deg: f64, longitude_deg: f64) -> Result<(), VedicError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
    }
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
    }
    Ok(())
}

/// Tropical ascendant longitude for a given LST and latitude, degrees.
pub fn ascendant_from_lst(lst_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Tropical MC longitude for a given LST, degrees.
pub fn mc_from_lst(lst_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}

/// Tropical ascendant at `jd` (UT) for an observer, degrees in [0, 360).
///
/// LST comes from the GMST polynomial plus east longitude. Near the poles
/// the ascendant jumps quickly with time but stays defined; a non-finite
/// result is reported as an error rather than replaced with a default.
pub fn ascendant_tropical_deg(
    jd: JulianDay,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, VedicError> {
    validate_location(latitude_deg, longitude_deg)?;
    let lst = local_sidereal_time_deg(jd.value(), longitude_deg);
    let asc = ascendant_from_lst(lst, latitude_deg);
    if !asc.is_finite() {
        return Err(VedicError::InvariantViolation(format!(
            "ascendant is not finite at {jd}, lat {latitude_deg}"
        )));
    }
    Ok(asc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equator_lst_zero_rises_cancer() {
        // Equinox culminating: 0° Cancer on the eastern horizon.
        assert_abs_diff_eq!(ascendant_from_lst(0.0, 0.0), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn equator_lst_ninety_rises_libra() {
        assert_abs_diff_eq!(ascendant_from_lst(90.0, 0.0), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn ascendant_leads_mc_by_quarter_at_equator_cardinals() {
        for lst in [0.0, 90.0, 180.0, 270.0] {
            let diff = normalize_360(ascendant_from_lst(lst, 0.0) - mc_from_lst(lst));
            assert_abs_diff_eq!(diff, 90.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn sweep_covers_full_circle_mid_latitude() {
        let mut prev = ascendant_from_lst(0.0, 28.6);
        let mut total = 0.0;
        for i in 1..=720 {
            let asc = ascendant_from_lst(i as f64 * 0.5, 28.6);
            total += normalize_360(asc - prev);
            prev = asc;
        }
        // One sidereal rotation advances the ascendant once around the zodiac.
        assert_abs_diff_eq!(total, 360.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_out_of_range_location() {
        let jd = JulianDay::new(2_451_545.0).unwrap();
        assert!(matches!(
            ascendant_tropical_deg(jd, 91.0, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(ascendant_tropical_deg(jd, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn high_latitude_still_finite() {
        let jd = JulianDay::new(2_451_545.25).unwrap();
        let asc = ascendant_tropical_deg(jd, 78.2, 15.6).unwrap();
        assert!((0.0..360.0).contains(&asc));
    }
}
