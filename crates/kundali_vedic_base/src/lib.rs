//! Pure-math Vedic chart calculations over sidereal longitudes.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra tables with lordship and dignity
//! - Ayanamsa (tropical → sidereal) correction
//! - Lagna from local sidereal time and equal-house assignment
//! - Divisional (varga) charts under harmonic and Parashari schemes
//! - Vimshottari dasha timelines with proportional subdivision
//! - Ashtakavarga bindu tables and sodhana reductions
//!
//! Every function is a pure function of its arguments.

pub mod amsha;
pub mod ashtakavarga;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use amsha::{
    ALL_AMSHAS, Amsha, DEFAULT_DIVISIONS, VargaChart, VargaPlacement, VargaScheme, varga_chart,
    varga_from_longitude, varga_from_sign_position, varga_sign,
};
pub use ashtakavarga::{
    AshtakavargaTable, BAV_TOTALS, BhinnaAshtakavarga, Contributor, ContributorPositions,
    MAX_BINDUS, SAV_TOTAL, Sodhana, ashtakavarga, benefic_offsets, bhinna_ashtakavarga,
    ekadhipatya_sodhana, sodhana, trikona_sodhana,
};
pub use ayanamsha::{Ayanamsa, DEFAULT_AYANAMSA_DEG, general_precession_arcsec, to_sidereal};
pub use bhava::{Bhava, equal_houses, house_of, house_of_checked};
pub use dasha::{
    BirthBalance, DashaHierarchy, DashaIter, DashaLevel, DashaNode, DashaOptions, DashaPeriod,
    DashaSnapshot, birth_balance, dasha_hierarchy, dasha_snapshot, nest_hierarchy,
    verify_hierarchy,
};
pub use dignity::{Dignity, dignity_of};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use lagna::{
    OBLIQUITY_J2000_DEG, ascendant_from_lst, ascendant_tropical_deg, mc_from_lst,
    validate_location,
};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Dms, Element, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::normalize_360;
