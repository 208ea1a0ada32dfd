//! Greenwich Mean Sidereal Time and Local Sidereal Time in degrees.
//!
//! GMST polynomial: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4,
//! evaluated directly on the supplied Julian Day.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Normalize an angle to [0, 360) degrees.
fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// `GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000`
/// where `d = JD − 2451545.0` and `T = d / 36525`.
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_deg(gmst)
}

/// Greenwich Mean Sidereal Time in hours [0, 24).
pub fn gmst_hours(jd: f64) -> f64 {
    gmst_deg(jd) / 15.0
}

/// Local Sidereal Time in degrees [0, 360) for an east-positive longitude.
pub fn local_sidereal_time_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    normalize_deg(gmst_deg(jd) + longitude_east_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000() {
        assert!((gmst_deg(J2000_JD) - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-Apr-10 0h UT → 13h10m46.3668s = 197.693195°
        let gmst = gmst_deg(2_446_895.5);
        assert!((gmst - 197.693_195).abs() < 1e-4, "gmst = {gmst}");
    }

    #[test]
    fn gmst_hours_range() {
        for &jd in &[2_451_545.0, 2_440_000.5, 2_460_000.25, 2_415_020.5] {
            let h = gmst_hours(jd);
            assert!((0.0..24.0).contains(&h), "GMST hours out of range: {h}");
        }
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_451_545.0;
        let lst = local_sidereal_time_deg(jd, 90.0);
        let expected = normalize_deg(gmst_deg(jd) + 90.0);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude_wraps() {
        let lst = local_sidereal_time_deg(J2000_JD, -300.0);
        assert!((0.0..360.0).contains(&lst));
    }
}
