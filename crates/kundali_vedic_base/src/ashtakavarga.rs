//! Ashtakavarga bindu scoring.
//!
//! Each of the 7 classical grahas receives benefic points ("bindus") from 8
//! contributors (the same 7 grahas plus the Lagna). A contributor gives a
//! bindu to slot H when the 1-based offset `((H − contributor) mod 12) + 1`
//! is in its table for the target graha.
//!
//! Slots are 1-based positions in a 12-slot frame. Callers pass houses
//! (Lagna in house 1) for the house-indexed table, or sign numbers for the
//! sign-indexed table that the sodhana reductions are defined on.
//!
//! Rule-table totals are fixed for every chart: Sun 48, Moon 49, Mars 39,
//! Mercury 54, Jupiter 56, Venus 52, Saturn 39; Sarvashtakavarga 337.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{Graha, SAPTA_GRAHAS};

/// Maximum bindus a single slot can hold: one per contributor.
pub const MAX_BINDUS: u8 = 8;

/// Rule-table totals per target graha (Sun..Saturn).
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

/// Sarvashtakavarga total.
pub const SAV_TOTAL: u16 = 337;

/// Who gives a bindu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contributor {
    Graha(Graha),
    Lagna,
}

impl Contributor {
    fn column(self) -> Option<usize> {
        match self {
            Self::Graha(g) if g.is_sapta() => Some(g.index() as usize),
            Self::Graha(_) => None,
            Self::Lagna => Some(7),
        }
    }
}

/// BENEFIC_OFFSETS[target][contributor]: 1-based offsets that earn a bindu.
///
/// Rows: Sun..Saturn targets. Columns: Sun..Saturn contributors, then Lagna.
const BENEFIC_OFFSETS: [[&[u8]; 8]; 7] = [
    // Surya
    [
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 6, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 5, 6, 9, 10, 11, 12],
        &[5, 6, 9, 11],
        &[6, 7, 12],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[3, 4, 6, 10, 11, 12],
    ],
    // Chandra
    [
        &[3, 6, 7, 8, 10, 11],
        &[1, 3, 6, 7, 10, 11],
        &[2, 3, 5, 6, 9, 10, 11],
        &[1, 3, 4, 5, 7, 8, 10, 11],
        &[1, 4, 7, 8, 10, 11, 12],
        &[3, 4, 5, 7, 9, 10, 11],
        &[3, 5, 6, 11],
        &[3, 6, 10, 11],
    ],
    // Mangal
    [
        &[3, 5, 6, 10, 11],
        &[3, 6, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 5, 6, 11],
        &[6, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 4, 7, 8, 9, 10, 11],
        &[1, 3, 6, 10, 11],
    ],
    // Buddh
    [
        &[5, 6, 9, 11, 12],
        &[2, 4, 6, 8, 10, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 3, 5, 6, 9, 10, 11, 12],
        &[6, 8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11],
        &[1, 2, 4, 7, 8, 9, 10, 11],
        &[1, 2, 4, 6, 8, 10, 11],
    ],
    // Guru
    [
        &[1, 2, 3, 4, 7, 8, 9, 10, 11],
        &[2, 5, 7, 9, 11],
        &[1, 2, 4, 7, 8, 10, 11],
        &[1, 2, 4, 5, 6, 9, 10, 11],
        &[1, 2, 3, 4, 7, 8, 10, 11],
        &[2, 5, 6, 9, 10, 11],
        &[3, 5, 6, 12],
        &[1, 2, 4, 5, 6, 7, 9, 10, 11],
    ],
    // Shukra
    [
        &[8, 11, 12],
        &[1, 2, 3, 4, 5, 8, 9, 11, 12],
        &[3, 4, 6, 9, 11, 12],
        &[3, 5, 6, 9, 11],
        &[5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 10, 11],
        &[3, 4, 5, 8, 9, 10, 11],
        &[1, 2, 3, 4, 5, 8, 9, 11],
    ],
    // Shani
    [
        &[1, 2, 4, 7, 8, 10, 11],
        &[3, 6, 11],
        &[3, 5, 6, 10, 11, 12],
        &[6, 8, 9, 10, 11, 12],
        &[5, 6, 11, 12],
        &[6, 11, 12],
        &[3, 5, 6, 11],
        &[1, 3, 4, 6, 10, 11],
    ],
];

/// Benefic offsets a contributor gives a target. Empty for the nodes.
pub fn benefic_offsets(target: Graha, contributor: Contributor) -> &'static [u8] {
    match (target.is_sapta(), contributor.column()) {
        (true, Some(col)) => BENEFIC_OFFSETS[target.index() as usize][col],
        _ => &[],
    }
}

/// 1-based offset of `slot` counted from `from`, both 1-based.
pub fn relative_offset(slot: u8, from: u8) -> u8 {
    ((slot + 12 - from) % 12) + 1
}

/// Positions (1-based slots) of the 8 contributors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorPositions {
    /// Slot of each classical graha, Sun..Saturn.
    pub grahas: [u8; 7],
    pub lagna: u8,
}

impl ContributorPositions {
    pub fn new(grahas: [u8; 7], lagna: u8) -> Result<Self, VedicError> {
        if grahas.iter().chain(std::iter::once(&lagna)).any(|s| !(1..=12).contains(s)) {
            return Err(VedicError::InvalidInput("ashtakavarga positions must be 1..=12"));
        }
        Ok(Self { grahas, lagna })
    }

    fn slot_of(&self, col: usize) -> u8 {
        if col < 7 { self.grahas[col] } else { self.lagna }
    }
}

/// Bhinna (individual) Ashtakavarga of one target graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BhinnaAshtakavarga {
    pub graha: Graha,
    /// Bindus per slot; element 0 is slot 1.
    pub bindus: [u8; 12],
}

impl BhinnaAshtakavarga {
    pub fn total(&self) -> u16 {
        self.bindus.iter().map(|&b| b as u16).sum()
    }
}

/// All 7 Bhinna tables plus the Sarvashtakavarga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AshtakavargaTable {
    pub bhinna: [BhinnaAshtakavarga; 7],
    /// Sum across the 7 targets per slot.
    pub sarva: [u8; 12],
}

impl AshtakavargaTable {
    pub fn bindus_of(&self, graha: Graha) -> Option<&[u8; 12]> {
        self.bhinna.iter().find(|b| b.graha == graha).map(|b| &b.bindus)
    }

    pub fn sarva_total(&self) -> u16 {
        self.sarva.iter().map(|&b| b as u16).sum()
    }

    /// Check the value ranges and that the sarva row is the column sum.
    pub fn verify(&self) -> Result<(), VedicError> {
        for b in &self.bhinna {
            if let Some(slot) = b.bindus.iter().position(|&v| v > MAX_BINDUS) {
                return Err(VedicError::InvariantViolation(format!(
                    "{} has {} bindus in slot {}",
                    b.graha,
                    b.bindus[slot],
                    slot + 1
                )));
            }
        }
        for slot in 0..12 {
            let sum: u16 = self.bhinna.iter().map(|b| b.bindus[slot] as u16).sum();
            if sum != self.sarva[slot] as u16 {
                return Err(VedicError::InvariantViolation(format!(
                    "sarvashtakavarga slot {} is {} but bhinna rows sum to {sum}",
                    slot + 1,
                    self.sarva[slot]
                )));
            }
        }
        Ok(())
    }
}

/// Bhinna Ashtakavarga of one classical graha.
pub fn bhinna_ashtakavarga(
    target: Graha,
    positions: &ContributorPositions,
) -> Result<BhinnaAshtakavarga, VedicError> {
    if !target.is_sapta() {
        return Err(VedicError::InvalidInput("ashtakavarga targets are the 7 classical grahas"));
    }
    let rules = &BENEFIC_OFFSETS[target.index() as usize];
    let mut bindus = [0u8; 12];
    for (slot, count) in (1u8..=12).zip(bindus.iter_mut()) {
        *count = rules
            .iter()
            .enumerate()
            .filter(|(col, offsets)| offsets.contains(&relative_offset(slot, positions.slot_of(*col))))
            .count() as u8;
    }
    Ok(BhinnaAshtakavarga { graha: target, bindus })
}

/// Full table: 7 Bhinna rows and the Sarvashtakavarga.
pub fn ashtakavarga(positions: &ContributorPositions) -> Result<AshtakavargaTable, VedicError> {
    let mut rows = Vec::with_capacity(7);
    for g in SAPTA_GRAHAS {
        rows.push(bhinna_ashtakavarga(g, positions)?);
    }
    let bhinna: [BhinnaAshtakavarga; 7] = rows
        .try_into()
        .map_err(|_| VedicError::InvariantViolation("expected 7 bhinna rows".into()))?;
    let mut sarva = [0u8; 12];
    for row in &bhinna {
        for (acc, &b) in sarva.iter_mut().zip(&row.bindus) {
            *acc += b;
        }
    }
    let table = AshtakavargaTable { bhinna, sarva };
    table.verify()?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Sodhana (reductions on the sign-indexed Sarvashtakavarga)
// ---------------------------------------------------------------------------

/// Signs sharing an element, 0-based.
const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Dual-ruled signs not already reduced as trines: Mercury and Jupiter.
const EKADHIPATYA_PAIRS: [[usize; 2]; 2] = [[2, 5], [8, 11]];

/// Sarvashtakavarga after the two reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sodhana {
    pub after_trikona: [u8; 12],
    pub after_ekadhipatya: [u8; 12],
}

/// Trikona sodhana: subtract each trine's minimum from its three signs.
pub fn trikona_sodhana(sav: &[u8; 12]) -> [u8; 12] {
    let mut out = *sav;
    for group in TRIKONA_GROUPS {
        let min = group.iter().map(|&i| out[i]).min().unwrap_or(0);
        group.iter().for_each(|&i| out[i] -= min);
    }
    out
}

/// Ekadhipatya sodhana: subtract each same-lord pair's minimum.
pub fn ekadhipatya_sodhana(after_trikona: &[u8; 12]) -> [u8; 12] {
    let mut out = *after_trikona;
    for [a, b] in EKADHIPATYA_PAIRS {
        let min = out[a].min(out[b]);
        out[a] -= min;
        out[b] -= min;
    }
    out
}

/// Both reductions applied in order to a sign-indexed Sarvashtakavarga.
pub fn sodhana(sav_by_sign: &[u8; 12]) -> Sodhana {
    let after_trikona = trikona_sodhana(sav_by_sign);
    Sodhana {
        after_ekadhipatya: ekadhipatya_sodhana(&after_trikona),
        after_trikona,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn positions(grahas: [u8; 7], lagna: u8) -> ContributorPositions {
        ContributorPositions::new(grahas, lagna).unwrap()
    }

    #[test]
    fn table_totals_are_fixed() {
        for (row, &expected) in BENEFIC_OFFSETS.iter().zip(&BAV_TOTALS) {
            let n: usize = row.iter().map(|o| o.len()).sum();
            assert_eq!(n, expected as usize);
        }
        let all: usize = BENEFIC_OFFSETS.iter().flatten().map(|o| o.len()).sum();
        assert_eq!(all, SAV_TOTAL as usize);
    }

    #[test]
    fn offsets_are_valid_and_unique() {
        for offsets in BENEFIC_OFFSETS.iter().flatten() {
            assert!(offsets.iter().all(|o| (1..=12).contains(o)));
            assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn relative_offset_counts_inclusively() {
        assert_eq!(relative_offset(1, 1), 1);
        assert_eq!(relative_offset(4, 1), 4);
        assert_eq!(relative_offset(1, 12), 2);
        assert_eq!(relative_offset(12, 1), 12);
    }

    #[test]
    fn any_positions_keep_totals() {
        let table = ashtakavarga(&positions([4, 8, 1, 12, 6, 10, 3], 2)).unwrap();
        for (row, &expected) in table.bhinna.iter().zip(&BAV_TOTALS) {
            assert_eq!(row.total(), expected as u16, "{}", row.graha);
        }
        assert_eq!(table.sarva_total(), SAV_TOTAL);
    }

    #[test]
    fn all_in_first_slot_sun_row() {
        // Every contributor in slot 1: slot H scores one bindu per table that
        // contains offset H.
        let table = ashtakavarga(&positions([1; 7], 1)).unwrap();
        let sun = table.bindus_of(Graha::Surya).unwrap();
        assert_eq!(*sun, [3, 3, 3, 4, 2, 5, 4, 3, 5, 6, 7, 3]);
    }

    #[test]
    fn nodes_are_not_targets() {
        let p = positions([1; 7], 1);
        assert!(bhinna_ashtakavarga(Graha::Rahu, &p).is_err());
        assert!(benefic_offsets(Graha::Ketu, Contributor::Lagna).is_empty());
        assert!(benefic_offsets(Graha::Surya, Contributor::Graha(Graha::Rahu)).is_empty());
    }

    #[test]
    fn rejects_out_of_range_positions() {
        assert!(ContributorPositions::new([0, 1, 1, 1, 1, 1, 1], 1).is_err());
        assert!(ContributorPositions::new([1; 7], 13).is_err());
    }

    #[test]
    fn verify_catches_tampered_sarva() {
        let mut table = ashtakavarga(&positions([3, 5, 7, 9, 11, 1, 2], 1)).unwrap();
        table.sarva[0] += 1;
        assert!(matches!(table.verify(), Err(VedicError::InvariantViolation(_))));
    }

    #[test]
    fn trikona_subtracts_trine_minimum() {
        let sav = [28, 25, 30, 20, 32, 22, 35, 18, 25, 27, 40, 15];
        assert_eq!(trikona_sodhana(&sav), [3, 3, 0, 5, 7, 0, 5, 3, 0, 5, 10, 0]);
    }

    #[test]
    fn ekadhipatya_only_touches_pairs() {
        let t = [3, 3, 15, 5, 7, 12, 5, 3, 10, 5, 10, 8];
        assert_eq!(ekadhipatya_sodhana(&t), [3, 3, 3, 5, 7, 0, 5, 3, 2, 5, 10, 0]);
    }

    #[test]
    fn sodhana_never_increases() {
        let table = ashtakavarga(&positions([1, 4, 7, 10, 2, 5, 8], 11)).unwrap();
        let s = sodhana(&table.sarva);
        for i in 0..12 {
            assert!(s.after_trikona[i] <= table.sarva[i]);
            assert!(s.after_ekadhipatya[i] <= s.after_trikona[i]);
        }
    }
}
