//! The nine chart bodies (grahas) and rashi lordship.
//!
//! Order throughout the crate is Sun, Moon, Mars, Mercury, Jupiter, Venus,
//! Saturn, Rahu, Ketu. The first seven are the classical (sapta) grahas used
//! by Ashtakavarga.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Graha {
    #[serde(rename = "sun")]
    Surya,
    #[serde(rename = "moon")]
    Chandra,
    #[serde(rename = "mars")]
    Mangal,
    #[serde(rename = "mercury")]
    Buddh,
    #[serde(rename = "jupiter")]
    Guru,
    #[serde(rename = "venus")]
    Shukra,
    #[serde(rename = "saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Lowercase identifier used on the wire and in configuration.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Surya => "sun",
            Self::Chandra => "moon",
            Self::Mangal => "mars",
            Self::Buddh => "mercury",
            Self::Guru => "jupiter",
            Self::Shukra => "venus",
            Self::Shani => "saturn",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
        }
    }

    /// Traditional glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Surya => "☉",
            Self::Chandra => "☽",
            Self::Mangal => "♂",
            Self::Buddh => "☿",
            Self::Guru => "♃",
            Self::Shukra => "♀",
            Self::Shani => "♄",
            Self::Rahu => "☊",
            Self::Ketu => "☋",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Whether this is one of the 7 classical grahas.
    pub const fn is_sapta(self) -> bool {
        !matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Whether this is a lunar node.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Accepts English or Sanskrit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| g.id() == lower || g.name().eq_ignore_ascii_case(&lower))
            .ok_or(VedicError::InvalidInput("unknown graha name"))
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn sapta_excludes_nodes() {
        assert_eq!(SAPTA_GRAHAS.len(), 7);
        assert!(SAPTA_GRAHAS.iter().all(|g| g.is_sapta()));
        assert!(Graha::Rahu.is_node() && Graha::Ketu.is_node());
    }

    #[test]
    fn parse_english_and_sanskrit() {
        assert_eq!("Jupiter".parse::<Graha>().unwrap(), Graha::Guru);
        assert_eq!("guru".parse::<Graha>().unwrap(), Graha::Guru);
        assert_eq!(" KETU ".parse::<Graha>().unwrap(), Graha::Ketu);
        assert!("pluto".parse::<Graha>().is_err());
    }

    #[test]
    fn serde_uses_wire_ids() {
        for g in ALL_GRAHAS {
            let json = serde_json::to_string(&g).unwrap();
            assert_eq!(json, format!("\"{}\"", g.id()));
            let back: Graha = serde_json::from_str(&json).unwrap();
            assert_eq!(back, g);
        }
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn luminaries_rule_single_signs() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
    }
}
