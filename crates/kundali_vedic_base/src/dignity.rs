//! Sign dignity of the classical grahas.
//!
//! Exaltation points are the BPHS degrees; debilitation is the opposite
//! point. Rahu and Ketu carry no dignity here and always classify as
//! [`Dignity::Neutral`].

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::Rashi;
use crate::util::{normalize_360, sign_index_of};

/// Dignity of a graha by sidereal placement, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Neutral,
    Debilitated,
}

/// Sidereal exaltation degree. None for the nodes.
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir, Jupiter 5 Can,
/// Venus 27 Pis, Saturn 20 Lib.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree, opposite the exaltation point.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) if e >= 180.0 => Some(e - 180.0),
        Some(e) => Some(e + 180.0),
        None => None,
    }
}

/// Sign of exaltation.
pub fn exaltation_sign(graha: Graha) -> Option<Rashi> {
    exaltation_degree(graha).map(|d| Rashi::from_index(sign_index_of(d)))
}

/// Sign of debilitation.
pub fn debilitation_sign(graha: Graha) -> Option<Rashi> {
    debilitation_degree(graha).map(|d| Rashi::from_index(sign_index_of(d)))
}

/// Moolatrikona range as (sign, start degree, end degree) within the sign.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Signs owned by a graha. Empty for the nodes.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Classify a graha at a sidereal longitude.
///
/// Priority: moolatrikona degrees, exaltation sign, debilitation sign,
/// own sign, otherwise neutral. The Moon and Mercury have their
/// moolatrikona inside the exaltation sign, so the degree range decides
/// there and the rest of the sign stays exalted.
pub fn dignity_of(graha: Graha, sidereal_lon: f64) -> Dignity {
    let lon = normalize_360(sidereal_lon);
    let rashi = Rashi::from_index(sign_index_of(lon));
    if let Some((mt, start, end)) = moolatrikona_range(graha) {
        let deg = lon - rashi.index() as f64 * 30.0;
        if mt == rashi && deg >= start && deg < end {
            return Dignity::Moolatrikona;
        }
    }
    if exaltation_sign(graha) == Some(rashi) {
        return Dignity::Exalted;
    }
    if debilitation_sign(graha) == Some(rashi) {
        return Dignity::Debilitated;
    }
    if own_signs(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }
    Dignity::Neutral
}
