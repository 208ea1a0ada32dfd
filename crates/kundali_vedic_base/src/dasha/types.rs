//! Core types for Vimshottari dasha (planetary period) timelines.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::balance::BirthBalance;
use super::vimshottari::VIMSHOTTARI_SEQUENCE;

/// Year length used to turn dasha years into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest supported level (Pranadasha).
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Default depth: Mahadasha, Antardasha, Pratyantardasha.
pub const DEFAULT_DASHA_LEVEL: u8 = 2;

/// Hard cap on periods per materialized level.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// Tolerance, in years, for the children-sum-to-parent check.
pub const DURATION_TOLERANCE_YEARS: f64 = 1e-6;

/// The 5 hierarchical dasha levels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    pub const fn depth(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    pub level: DashaLevel,
    /// JD, inclusive.
    pub start_jd: f64,
    /// JD, exclusive.
    pub end_jd: f64,
    /// Length in years. Children of a period sum to this value.
    pub duration_years: f64,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index of the parent in the previous level's array. None at level 0.
    pub parent_idx: Option<u32>,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` lies in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Depth and cycle count for a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaOptions {
    /// Deepest level to generate, 0..=4.
    pub max_level: u8,
    /// Number of 120-year cycles of Mahadashas, 1 or 2.
    pub cycles: u8,
}

impl Default for DashaOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_DASHA_LEVEL,
            cycles: 1,
        }
    }
}

impl DashaOptions {
    /// Number of periods at `level` in a full hierarchy.
    pub fn periods_at(&self, level: u8) -> usize {
        let per_cycle = VIMSHOTTARI_SEQUENCE.len();
        (0..level).fold(per_cycle * self.cycles as usize, |n, _| {
            n.saturating_mul(per_cycle)
        })
    }

    /// Deepest level, at most `max_level`, that [`dasha_hierarchy`] can
    /// materialize under [`MAX_PERIODS_PER_LEVEL`].
    ///
    /// [`dasha_hierarchy`]: super::dasha_hierarchy
    pub fn materialized_level(&self) -> u8 {
        (0..=self.max_level)
            .rev()
            .find(|&level| self.periods_at(level) <= MAX_PERIODS_PER_LEVEL)
            .unwrap_or(0)
    }

    /// Same cycles, depth clipped to [`Self::materialized_level`].
    pub fn materialized(&self) -> Self {
        Self {
            max_level: self.materialized_level(),
            ..*self
        }
    }
}

/// Fully materialized timeline, one array per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    pub balance: BirthBalance,
    /// `levels[0]` are the Mahadashas, `levels[1]` the Antardashas, ...
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// Active period chain at an instant, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trip() {
        for d in 0..=MAX_DASHA_LEVEL {
            assert_eq!(DashaLevel::from_u8(d).map(DashaLevel::depth), Some(d));
        }
        assert_eq!(DashaLevel::from_u8(5), None);
    }

    #[test]
    fn period_counts_per_level() {
        let one = DashaOptions { max_level: 4, cycles: 1 };
        assert_eq!(one.periods_at(0), 9);
        assert_eq!(one.periods_at(4), 59_049);
        let two = DashaOptions { max_level: 4, cycles: 2 };
        assert_eq!(two.periods_at(4), 118_098);
    }

    #[test]
    fn materialized_level_respects_cap() {
        let one = DashaOptions { max_level: 4, cycles: 1 };
        assert_eq!(one.materialized_level(), 4);
        let two = DashaOptions { max_level: 4, cycles: 2 };
        assert_eq!(two.materialized_level(), 3);
        assert_eq!(two.materialized(), DashaOptions { max_level: 3, cycles: 2 });
        let shallow = DashaOptions { max_level: 1, cycles: 2 };
        assert_eq!(shallow.materialized(), shallow);
    }

    #[test]
    fn level_children_chain() {
        assert_eq!(DashaLevel::Mahadasha.child_level(), Some(DashaLevel::Antardasha));
        assert_eq!(DashaLevel::Pranadasha.child_level(), None);
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod {
            lord: Graha::Ketu,
            level: DashaLevel::Mahadasha,
            start_jd: 10.0,
            end_jd: 20.0,
            duration_years: 10.0 / DAYS_PER_YEAR,
            order: 1,
            parent_idx: None,
        };
        assert!(p.contains(10.0));
        assert!(p.contains(19.999));
        assert!(!p.contains(20.0));
        assert!((p.duration_days() - 10.0).abs() < 1e-12);
    }
}
