//! Seam between the resolvers and any source of precise positions.

use kundali_time::JulianDay;

use crate::error::EphemerisError;
use crate::position::TropicalPositions;

/// A source of tropical positions and ascendants.
///
/// Implementations may block (network, disk) but must bound the wait
/// themselves; the resolvers treat every error as "unavailable".
pub trait EphemerisProvider: Send + Sync {
    /// Short label recorded in the primary provenance.
    fn name(&self) -> &'static str;

    /// Tropical longitudes of all 9 grahas at `jd`.
    fn tropical_positions(&self, jd: JulianDay) -> Result<TropicalPositions, EphemerisError>;

    /// Tropical ascendant for an observer at `jd`, degrees in [0, 360).
    fn tropical_ascendant(
        &self,
        jd: JulianDay,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, EphemerisError>;
}
