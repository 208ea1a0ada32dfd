//! The Vimshottari lord cycle.
//!
//! Nine lords with fixed weights summing to 120 years. The same cycle orders
//! the Mahadashas and every deeper subdivision, always starting from the
//! parent's own lord.

use crate::graha::Graha;

/// Lord and full period in years, in cycle order.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Length of one full cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a lord in the cycle. Every graha appears exactly once.
pub fn cycle_position(lord: Graha) -> usize {
    match lord {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full Mahadasha length of a lord, in years.
pub fn full_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[cycle_position(lord)].1
}

/// The 9 (lord, years) entries starting at `lord`.
pub fn cycle_from(lord: Graha) -> impl Iterator<Item = (Graha, f64)> + Clone {
    let start = cycle_position(lord);
    (0..VIMSHOTTARI_SEQUENCE.len()).map(move |i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}
