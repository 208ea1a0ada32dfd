//! Amsha (divisional / varga chart) calculations.
//!
//! Each 30° rashi is cut into N equal parts and every part maps to a derived
//! sign. Two schemes are offered:
//!
//! - [`VargaScheme::Harmonic`]: `derived = ((N·(sign−1) + part) mod 12) + 1`,
//!   a straight continuation of the zodiac N times around.
//! - [`VargaScheme::Parashari`]: the BPHS starting-sign rules for the
//!   Shodashavarga charts (element starts for D9/D16/D20, odd/even starts for
//!   D7/D10/D24/D30, trines for D3).
//!
//! Both schemes report the 1-based part index, so `part ∈ 1..=N` and
//! `sign ∈ 1..=12` hold for every valid input.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::{Element, Rashi};
use crate::util::{normalize_360, sign_index_of};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Amsha {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D30,
}

pub const ALL_AMSHAS: [Amsha; 15] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D5,
    Amsha::D6,
    Amsha::D7,
    Amsha::D8,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D30,
];

/// The divisional charts computed when no explicit list is given.
pub const DEFAULT_DIVISIONS: [u16; 14] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 16, 20, 24, 30];

impl Amsha {
    /// Number of parts per rashi (the N in DN).
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D5 => 5,
            Self::D6 => 6,
            Self::D7 => 7,
            Self::D8 => 8,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D30 => 30,
        }
    }

    /// Traditional Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D5 => "Panchamsha",
            Self::D6 => "Shashthamsha",
            Self::D7 => "Saptamsha",
            Self::D8 => "Ashtamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D30 => "Trimshamsha",
        }
    }

    /// Reverse lookup from the division factor.
    pub fn from_divisions(n: u16) -> Result<Self, VedicError> {
        ALL_AMSHAS
            .iter()
            .copied()
            .find(|a| a.divisions() == n)
            .ok_or(VedicError::UnsupportedDivision(n))
    }
}

impl Display for Amsha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.divisions())
    }
}

impl Serialize for Amsha {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.divisions())
    }
}

impl<'de> Deserialize<'de> for Amsha {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u16::deserialize(deserializer)?;
        Self::from_divisions(n).map_err(serde::de::Error::custom)
    }
}

/// Which sign-mapping rule a varga chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VargaScheme {
    #[default]
    Harmonic,
    Parashari,
}

/// Placement of one point in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPlacement {
    /// Derived sign, 1..=12.
    pub sign: u8,
    /// 1-based part of the natal sign the point falls in, 1..=N.
    pub part: u8,
    /// Position inside the derived sign, scaled back to [0, 30).
    pub degrees_in_sign: f64,
}

impl VargaPlacement {
    pub fn rashi(&self) -> Rashi {
        Rashi::from_index(self.sign - 1)
    }
}

/// Derived sign and part for a sign number, degree within it and factor N.
///
/// `arc = 30/N`, `part = ⌊degree/arc⌋`,
/// `derived = ((N·(sign−1) + part) mod 12) + 1`. Returns
/// `(derived_sign, part + 1)`.
pub fn varga_sign(sign: u8, degree_in_sign: f64, n: u16) -> Result<(u8, u8), VedicError> {
    let amsha = Amsha::from_divisions(n)?;
    let p = varga_from_sign_position(sign, degree_in_sign, amsha, VargaScheme::Harmonic)?;
    Ok((p.sign, p.part))
}

/// Place a sign-relative position in a divisional chart.
pub fn varga_from_sign_position(
    sign: u8,
    degree_in_sign: f64,
    amsha: Amsha,
    scheme: VargaScheme,
) -> Result<VargaPlacement, VedicError> {
    if !(1..=12).contains(&sign) {
        return Err(VedicError::InvalidInput("sign number must be 1..=12"));
    }
    if !degree_in_sign.is_finite() || !(0.0..30.0).contains(&degree_in_sign) {
        return Err(VedicError::InvalidInput("degree within sign must be in [0, 30)"));
    }
    Ok(place(sign - 1, degree_in_sign, amsha, scheme))
}

/// Place a sidereal longitude in a divisional chart.
pub fn varga_from_longitude(sidereal_lon: f64, amsha: Amsha, scheme: VargaScheme) -> VargaPlacement {
    let lon = normalize_360(sidereal_lon);
    let idx = sign_index_of(lon);
    place(idx, lon - idx as f64 * 30.0, amsha, scheme)
}

fn place(sign_idx: u8, degree: f64, amsha: Amsha, scheme: VargaScheme) -> VargaPlacement {
    let n = amsha.divisions();
    let scaled = degree * n as f64 / 30.0;
    let part = (scaled.floor() as u16).min(n - 1);
    let target = match scheme {
        VargaScheme::Harmonic => ((n * sign_idx as u16 + part) % 12) as u8,
        VargaScheme::Parashari => parashari_target(amsha, sign_idx, part),
    };
    VargaPlacement {
        sign: target + 1,
        part: part as u8 + 1,
        degrees_in_sign: ((scaled - part as f64) * 30.0).clamp(0.0, 30.0 - 1e-12),
    }
}

/// BPHS target rashi index for part `part` (0-based) of rashi `sign_idx`.
fn parashari_target(amsha: Amsha, sign_idx: u8, part: u16) -> u8 {
    let natal = Rashi::from_index(sign_idx);
    let start: u16 = match amsha {
        Amsha::D1 => return sign_idx,
        Amsha::D2 => (sign_idx as u16 * 2) % 12,
        Amsha::D3 => return ((sign_idx as u16 + part * 4) % 12) as u8,
        Amsha::D7 => odd_even_start(natal, 6),
        Amsha::D10 => odd_even_start(natal, 8),
        Amsha::D24 => odd_even_start(natal, 4),
        Amsha::D9 => match natal.element() {
            Element::Fire => 0,
            Element::Earth => 9,
            Element::Air => 6,
            Element::Water => 3,
        },
        Amsha::D16 => match natal.element() {
            Element::Fire | Element::Water => 0,
            Element::Earth => 4,
            Element::Air => 8,
        },
        Amsha::D20 => match natal.element() {
            Element::Fire | Element::Water => 0,
            Element::Earth => 8,
            Element::Air => 4,
        },
        Amsha::D30 => {
            if natal.is_odd() {
                0
            } else {
                11
            }
        }
        Amsha::D4 | Amsha::D5 | Amsha::D6 | Amsha::D8 | Amsha::D12 => sign_idx as u16,
    };
    ((start + part) % 12) as u8
}

/// Odd signs count from themselves, even signs from `even_offset` signs on.
fn odd_even_start(natal: Rashi, even_offset: u16) -> u16 {
    if natal.is_odd() {
        natal.index() as u16
    } else {
        (natal.index() as u16 + even_offset) % 12
    }
}

/// One divisional chart: every graha plus the Lagna.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VargaChart {
    pub amsha: Amsha,
    pub name: String,
    pub scheme: VargaScheme,
    pub lagna: VargaPlacement,
    pub grahas: BTreeMap<Graha, VargaPlacement>,
}

/// Build a divisional chart from sidereal longitudes.
pub fn varga_chart(
    amsha: Amsha,
    scheme: VargaScheme,
    lagna_lon: f64,
    graha_lons: &[(Graha, f64)],
) -> VargaChart {
    VargaChart {
        amsha,
        name: amsha.name().to_string(),
        scheme,
        lagna: varga_from_longitude(lagna_lon, amsha, scheme),
        grahas: graha_lons
            .iter()
            .map(|&(g, lon)| (g, varga_from_longitude(lon, amsha, scheme)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aries_fifteen_degrees_navamsha() {
        assert_eq!(varga_sign(1, 15.0, 9), Ok((5, 5)));
    }

    #[test]
    fn d1_is_identity() {
        for sign in 1..=12u8 {
            assert_eq!(varga_sign(sign, 12.0, 1), Ok((sign, 1)));
        }
    }

    #[test]
    fn unsupported_factor_rejected() {
        assert_eq!(varga_sign(1, 1.0, 11), Err(VedicError::UnsupportedDivision(11)));
        assert_eq!(varga_sign(1, 1.0, 60), Err(VedicError::UnsupportedDivision(60)));
    }

    #[test]
    fn malformed_position_rejected() {
        assert!(varga_sign(0, 1.0, 9).is_err());
        assert!(varga_sign(13, 1.0, 9).is_err());
        assert!(varga_sign(1, 30.0, 9).is_err());
        assert!(varga_sign(1, -0.1, 9).is_err());
        assert!(varga_sign(1, f64::NAN, 9).is_err());
    }

    #[test]
    fn last_part_of_every_factor() {
        for n in DEFAULT_DIVISIONS {
            let (_, part) = varga_sign(12, 29.999_999, n).unwrap();
            assert_eq!(part as u16, n, "D{n}");
        }
    }

    #[test]
    fn parashari_navamsha_by_element() {
        // Vrishabha 15.5°: earth starts at Makara, part 5 → Vrishabha
        let p = varga_from_longitude(45.5, Amsha::D9, VargaScheme::Parashari);
        assert_eq!(p.rashi(), Rashi::Vrishabha);
        assert!((p.degrees_in_sign - 19.5).abs() < 1e-9);
        // Mithuna 0°: air starts at Tula
        let p = varga_from_longitude(60.0, Amsha::D9, VargaScheme::Parashari);
        assert_eq!(p.rashi(), Rashi::Tula);
    }

    #[test]
    fn navamsha_schemes_agree() {
        // The harmonic continuation reproduces the element starts for D9.
        for i in 0..360 {
            let lon = i as f64 + 0.25;
            let h = varga_from_longitude(lon, Amsha::D9, VargaScheme::Harmonic);
            let p = varga_from_longitude(lon, Amsha::D9, VargaScheme::Parashari);
            assert_eq!(h.sign, p.sign, "lon {lon}");
        }
    }

    #[test]
    fn parashari_hora_and_drekkana() {
        let p = varga_from_longitude(45.5, Amsha::D2, VargaScheme::Parashari);
        assert_eq!(p.rashi(), Rashi::Karka);
        let p = varga_from_longitude(45.5, Amsha::D3, VargaScheme::Parashari);
        assert_eq!(p.rashi(), Rashi::Kanya);
        assert!((p.degrees_in_sign - 16.5).abs() < 1e-9);
    }

    #[test]
    fn parashari_trimshamsha_odd_even() {
        assert_eq!(
            varga_from_longitude(1.5, Amsha::D30, VargaScheme::Parashari).rashi(),
            Rashi::Vrishabha
        );
        assert_eq!(
            varga_from_longitude(31.5, Amsha::D30, VargaScheme::Parashari).rashi(),
            Rashi::Mesha
        );
    }

    #[test]
    fn chart_holds_every_graha() {
        let lons = [(Graha::Surya, 10.0), (Graha::Chandra, 50.0), (Graha::Ketu, 200.0)];
        let chart = varga_chart(Amsha::D9, VargaScheme::Harmonic, 5.0, &lons);
        assert_eq!(chart.grahas.len(), 3);
        assert_eq!(chart.name, "Navamsha");
        assert_eq!(chart.grahas[&Graha::Chandra].sign, varga_sign(2, 20.0, 9).unwrap().0);
    }

    #[test]
    fn amsha_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Amsha::D24).unwrap(), "24");
        assert_eq!(serde_json::from_str::<Amsha>("10").unwrap(), Amsha::D10);
        assert!(serde_json::from_str::<Amsha>("11").is_err());
    }
}
