//! Closed-form mean-motion model used when no ephemeris answers.
//!
//! Each body moves as `L = L0 + rate · T`, `T` in Julian centuries of UT
//! since J2000.0. Mean elements follow Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapters 25, 31, 47. Heliocentric rates are used for the
//! planets, so elongations drift by up to tens of degrees; the model is a
//! degraded stand-in, and callers see it through the fallback provenance.
//!
//! Ketu is always `Rahu + 180`. The model never reports retrograde motion.

use kundali_time::JulianDay;
use kundali_vedic_base::{Graha, normalize_360};

use crate::position::{BodyLongitude, TropicalPositions};

/// Mean longitude at J2000 and rate, degrees and degrees per Julian century.
/// Indexed by [`Graha::index`]; Ketu is derived.
#[rustfmt::skip]
static MEAN_ELEMENTS: [(Graha, f64, f64); 8] = [
    // graha            L0 (deg)        rate (deg/cy)
    (Graha::Surya,   280.466_46,     36_000.769_83),
    (Graha::Chandra, 218.316_447_7, 481_267.881_234_21),
    (Graha::Mangal,  355.433,        19_141.696_447_1),
    (Graha::Buddh,   252.250_906,   149_474.072_249_1),
    (Graha::Guru,     34.351_519,     3_036.302_774_8),
    (Graha::Shukra,  181.979_801,    58_519.213_030_2),
    (Graha::Shani,    50.077_444,     1_223.511_068_6),
    (Graha::Rahu,    125.044_52,     -1_934.136_261),
];

/// Mean tropical longitude of one graha, degrees in [0, 360).
pub fn mean_longitude(graha: Graha, t: f64) -> f64 {
    match graha {
        Graha::Ketu => normalize_360(mean_longitude(Graha::Rahu, t) + 180.0),
        _ => {
            let (_, l0, rate) = MEAN_ELEMENTS[graha.index() as usize];
            normalize_360(l0 + rate * t)
        }
    }
}

/// Mean tropical positions of all 9 grahas at `jd`.
pub fn mean_positions(jd: JulianDay) -> TropicalPositions {
    let t = jd.centuries_since_j2000();
    TropicalPositions::from_fn(|graha| BodyLongitude {
        graha,
        longitude: mean_longitude(graha, t),
        speed: None,
        retrograde: false,
    })
}
