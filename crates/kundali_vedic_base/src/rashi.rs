//! Rashi (zodiac sign) placement and DMS formatting.
//!
//! The sidereal ecliptic is cut into 12 signs of 30° starting at Mesha.
//! Sign numbers exposed to callers are 1-based (Mesha = 1, Meena = 12);
//! `index()` stays 0-based for table lookups.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::{normalize_360, sign_index_of};

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element of a sign, cycling Fire, Earth, Air, Water from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha = 1 .. Meena = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi from a 0-based index, wrapping modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_RASHIS[(idx % 12) as usize]
    }

    /// Rashi from a 1-based sign number.
    pub fn from_number(number: u8) -> Result<Self, VedicError> {
        match number {
            1..=12 => Ok(ALL_RASHIS[(number - 1) as usize]),
            _ => Err(VedicError::InvalidInput("sign number must be 1..=12")),
        }
    }

    /// The sign `n` places from this one, counting this sign as 1st.
    pub const fn nth_from(self, n: u8) -> Self {
        Self::from_index(self.index() + (n % 12 + 11) % 12)
    }

    /// Odd (masculine) signs: Mesha, Mithuna, Simha, ...
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Arc-seconds in [0, 60), fractional part kept.
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds (sign is dropped).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (rem - minutes as f64) * 60.0,
    }
}

/// Sign placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 1-based sign number.
    pub sign: u8,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Place a sidereal longitude in its rashi.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), and so on. Input is normalized
/// into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = sign_index_of(lon);
    let degrees_in_rashi = lon - idx as f64 * 30.0;
    RashiInfo {
        rashi: Rashi::from_index(idx),
        sign: idx + 1,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
