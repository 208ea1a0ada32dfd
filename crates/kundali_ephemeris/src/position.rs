//! Tropical body positions as produced by either resolution path.

use kundali_vedic_base::{ALL_GRAHAS, Graha};
use serde::{Deserialize, Serialize};

/// Tropical longitude of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLongitude {
    pub graha: Graha,
    /// Degrees in [0, 360).
    pub longitude: f64,
    /// Daily motion in degrees, when the provider reports it.
    pub speed: Option<f64>,
    pub retrograde: bool,
}

/// Longitudes of all 9 grahas, indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TropicalPositions {
    bodies: [BodyLongitude; 9],
}

impl TropicalPositions {
    /// Build from one entry per graha in `ALL_GRAHAS` order.
    ///
    /// Returns `None` if an entry is out of order.
    pub fn from_ordered(bodies: [BodyLongitude; 9]) -> Option<Self> {
        bodies
            .iter()
            .zip(ALL_GRAHAS)
            .all(|(b, g)| b.graha == g)
            .then_some(Self { bodies })
    }

    /// Build by evaluating `f` once per graha. The graha field of each
    /// entry is overwritten with the slot it occupies.
    pub fn from_fn(mut f: impl FnMut(Graha) -> BodyLongitude) -> Self {
        Self {
            bodies: ALL_GRAHAS.map(|graha| BodyLongitude { graha, ..f(graha) }),
        }
    }

    pub fn get(&self, graha: Graha) -> &BodyLongitude {
        &self.bodies[graha.index() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyLongitude> {
        self.bodies.iter()
    }

    /// `(graha, longitude)` pairs in traditional order.
    pub fn longitudes(&self) -> [(Graha, f64); 9] {
        self.bodies.map(|b| (b.graha, b.longitude))
    }
}
