//! Sidereal birth chart assembly.
//!
//! This crate provides:
//! - [`BirthInput`] validation and [`ChartOptions`] built from configuration
//! - [`compute_chart`]: positions, ascendant, equal houses, divisional
//!   charts, the Vimshottari timeline and Ashtakavarga in one pass
//! - [`verify_chart`] structural checks run on every computed chart
//!
//! Stages run in dependency order: Julian Day, tropical positions (primary
//! or fallback), ayanamsa, ascendant and houses, then the independent
//! varga, dasha and ashtakavarga sections.

pub mod compute;
pub mod error;
pub mod input;
pub mod options;
pub mod types;
pub mod verify;

pub use compute::compute_chart;
pub use error::ChartError;
pub use input::BirthInput;
pub use options::ChartOptions;
pub use types::{
    AshtakavargaReport, Chart, ChartBody, ChartProvenance, DashaReport, PlanetaryPosition,
};
pub use verify::verify_chart;
