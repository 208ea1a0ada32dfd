//! Output contract of a computed chart.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use kundali_ephemeris::Provenance;
use kundali_time::JulianDay;
use kundali_vedic_base::dasha::{BirthBalance, DashaNode, DashaOptions, DashaPeriod};
use kundali_vedic_base::{
    AshtakavargaTable, Ayanamsa, Bhava, Dignity, Dms, Graha, Nakshatra, Rashi, Sodhana, VargaChart,
};
use serde::{Serialize, Serializer};

use crate::input::BirthInput;

/// A point placed in the chart: one of the 9 grahas or the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartBody {
    Graha(Graha),
    Ascendant,
}

impl ChartBody {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Graha(g) => g.id(),
            Self::Ascendant => "ascendant",
        }
    }
}

impl Display for ChartBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Graha(g) => write!(f, "{g}"),
            Self::Ascendant => f.write_str("Ascendant"),
        }
    }
}

impl Serialize for ChartBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Sidereal placement of one chart body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryPosition {
    pub body: ChartBody,
    /// Sidereal longitude, degrees in [0, 360).
    pub longitude: f64,
    pub tropical_longitude: f64,
    /// 1..=12.
    pub sign: u8,
    pub rashi: Rashi,
    /// Degrees in [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
    /// Equal house from the ascendant, 1..=12.
    pub house: u8,
    pub nakshatra: Nakshatra,
    /// 1..=27.
    pub nakshatra_number: u8,
    /// 1..=4.
    pub pada: u8,
    pub retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Absent for the ascendant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dignity: Option<Dignity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaReport {
    pub options: DashaOptions,
    /// Deepest level present in `timeline`, below `options.max_level`
    /// only when a full level would be too large to materialize.
    pub timeline_level: u8,
    pub balance: BirthBalance,
    /// Instant used for the active markers.
    pub reference_jd: JulianDay,
    /// Active chain from Mahadasha down, empty outside the timeline.
    pub active: Vec<DashaPeriod>,
    pub timeline: Vec<DashaNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakavargaReport {
    /// Slot 1 is the ascendant's house.
    pub by_house: AshtakavargaTable,
    /// Slot 1 is Mesha.
    pub by_sign: AshtakavargaTable,
    /// Reductions of the sign-indexed Sarvashtakavarga.
    pub sodhana: Sodhana,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartProvenance {
    pub positions: Provenance,
    pub ascendant: Provenance,
}

impl ChartProvenance {
    /// Whether any part of the chart came from a fallback model.
    pub fn degraded(&self) -> bool {
        self.positions.is_fallback() || self.ascendant.is_fallback()
    }
}

/// A complete sidereal birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub input: BirthInput,
    pub julian_day: JulianDay,
    pub ayanamsa: Ayanamsa,
    /// Correction actually applied at the birth instant.
    pub ayanamsa_deg: f64,
    /// All 9 grahas plus the ascendant.
    pub positions: BTreeMap<ChartBody, PlanetaryPosition>,
    pub houses: [Bhava; 12],
    /// Keyed by division factor.
    pub vargas: BTreeMap<u16, VargaChart>,
    pub dasha: DashaReport,
    pub ashtakavarga: AshtakavargaReport,
    pub provenance: ChartProvenance,
}

impl Chart {
    pub fn position(&self, body: ChartBody) -> Option<&PlanetaryPosition> {
        self.positions.get(&body)
    }

    pub fn graha(&self, graha: Graha) -> Option<&PlanetaryPosition> {
        self.position(ChartBody::Graha(graha))
    }

    pub fn ascendant(&self) -> Option<&PlanetaryPosition> {
        self.position(ChartBody::Ascendant)
    }
}
