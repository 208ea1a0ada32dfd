//! The 27 nakshatras (lunar mansions) and their padas.
//!
//! Each nakshatra spans 13°20' and is split into 4 padas of 3°20'. Lordship
//! repeats the Vimshottari sequence every 9 mansions starting from Ashwini.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::dasha::vimshottari::VIMSHOTTARI_SEQUENCE;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (0 = Ashwini).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based nakshatra number (1 = Ashwini .. 27 = Revati).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_index(idx: u8) -> Self {
        ALL_NAKSHATRAS[(idx % 27) as usize]
    }

    /// Ruling graha in the Vimshottari scheme.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_SEQUENCE[(self.index() % 9) as usize].0
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nakshatra placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra number.
    pub number: u8,
    /// Pada (quarter) within the nakshatra, 1..=4.
    pub pada: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Place a sidereal longitude in its nakshatra and pada.
///
/// `index = ⌊lon·27/360⌋ mod 27`, `fraction = (lon·27/360) mod 1`.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let scaled = normalize_360(sidereal_lon_deg) * 27.0 / 360.0;
    let idx = (scaled.floor() as u8).min(26);
    let elapsed_fraction = (scaled - idx as f64).clamp(0.0, 1.0 - f64::EPSILON);
    let pada = ((elapsed_fraction * 4.0).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: Nakshatra::from_index(idx),
        number: idx + 1,
        pada,
        elapsed_fraction,
        degrees_in_nakshatra: elapsed_fraction * NAKSHATRA_SPAN,
    }
}
