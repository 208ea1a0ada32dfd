//! Vimshottari timeline generation.
//!
//! Four entry points of increasing cost:
//! - [`mahadashas`]: level 0 only.
//! - [`dasha_snapshot`]: the active chain at one instant, O(depth · 9).
//! - [`DashaIter`]: lazy depth-first walk, nothing materialized up front.
//! - [`dasha_hierarchy`]: every level up to the requested depth.

use tracing::debug;

use crate::error::VedicError;

use super::balance::birth_balance;
use super::query::find_active_period;
use super::subperiod::subdivide;
use super::types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaOptions, DashaPeriod, DashaSnapshot,
    MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
use super::vimshottari::{VIMSHOTTARI_SEQUENCE, cycle_from};

fn validate(birth_jd: f64, moon_sidereal_lon: f64, options: &DashaOptions) -> Result<(), VedicError> {
    if !birth_jd.is_finite() || !moon_sidereal_lon.is_finite() {
        return Err(VedicError::InvalidInput("dasha inputs must be finite"));
    }
    if options.max_level > MAX_DASHA_LEVEL {
        return Err(VedicError::InvalidInput("dasha max_level must be 0..=4"));
    }
    if !(1..=2).contains(&options.cycles) {
        return Err(VedicError::InvalidInput("dasha cycles must be 1 or 2"));
    }
    Ok(())
}

/// Mahadashas from birth: the balance of the birth lord, then full periods
/// in cycle order, `9 · cycles` entries in total.
pub fn mahadashas(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    cycles: u8,
) -> Result<Vec<DashaPeriod>, VedicError> {
    validate(
        birth_jd,
        moon_sidereal_lon,
        &DashaOptions { max_level: 0, cycles },
    )?;
    let balance = birth_balance(moon_sidereal_lon);
    let total = VIMSHOTTARI_SEQUENCE.len() * cycles as usize;
    let mut periods = Vec::with_capacity(total);
    let mut cursor = birth_jd;
    for (i, (lord, years)) in cycle_from(balance.lord).cycle().take(total).enumerate() {
        let duration_years = if i == 0 { balance.remaining_years } else { years };
        let end = cursor + duration_years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: end,
            duration_years,
            order: i as u16 + 1,
            parent_idx: None,
        });
        cursor = end;
    }
    Ok(periods)
}

/// Every level from Mahadasha down to `options.max_level`.
pub fn dasha_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    options: &DashaOptions,
) -> Result<DashaHierarchy, VedicError> {
    validate(birth_jd, moon_sidereal_lon, options)?;
    let mut levels = vec![mahadashas(birth_jd, moon_sidereal_lon, options.cycles)?];
    for depth in 1..=options.max_level {
        let parents = &levels[depth as usize - 1];
        let estimated = parents.len() * VIMSHOTTARI_SEQUENCE.len();
        if estimated > MAX_PERIODS_PER_LEVEL {
            return Err(VedicError::InvalidInput(
                "dasha level would exceed MAX_PERIODS_PER_LEVEL",
            ));
        }
        let mut next = Vec::with_capacity(estimated);
        for (idx, parent) in parents.iter().enumerate() {
            next.extend(subdivide(parent, idx as u32));
        }
        debug!(depth, periods = next.len(), "dasha level generated");
        levels.push(next);
    }
    Ok(DashaHierarchy {
        birth_jd,
        balance: birth_balance(moon_sidereal_lon),
        levels,
    })
}

/// Active periods at `query_jd` without materializing the hierarchy.
///
/// The chain is empty when `query_jd` falls outside the generated cycles.
pub fn dasha_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    options: &DashaOptions,
) -> Result<DashaSnapshot, VedicError> {
    validate(birth_jd, moon_sidereal_lon, options)?;
    let level0 = mahadashas(birth_jd, moon_sidereal_lon, options.cycles)?;
    let mut periods = Vec::with_capacity(options.max_level as usize + 1);
    if let Some(idx) = find_active_period(&level0, query_jd) {
        let mut current = level0[idx];
        let mut current_idx = idx as u32;
        periods.push(current);
        for _ in 0..options.max_level {
            let children = subdivide(&current, current_idx);
            let Some(child_idx) = find_active_period(&children, query_jd) else {
                break;
            };
            current = children[child_idx];
            // Index within the full level array: parent index · 9 + sibling slot.
            current_idx = current_idx * VIMSHOTTARI_SEQUENCE.len() as u32 + child_idx as u32;
            periods.push(current);
        }
    }
    Ok(DashaSnapshot { query_jd, periods })
}

/// Lazy depth-first (pre-order) walk over the timeline.
///
/// Yields each period followed by its descendants down to `max_level`,
/// in chronological order within every parent. `parent_idx` values match
/// the level arrays of [`dasha_hierarchy`].
#[derive(Debug, Clone)]
pub struct DashaIter {
    stack: Vec<DashaPeriod>,
    max_level: u8,
    emitted_per_level: [u32; MAX_DASHA_LEVEL as usize + 1],
}

impl DashaIter {
    pub fn new(
        birth_jd: f64,
        moon_sidereal_lon: f64,
        options: &DashaOptions,
    ) -> Result<Self, VedicError> {
        validate(birth_jd, moon_sidereal_lon, options)?;
        let mut stack = mahadashas(birth_jd, moon_sidereal_lon, options.cycles)?;
        stack.reverse();
        Ok(Self {
            stack,
            max_level: options.max_level,
            emitted_per_level: [0; MAX_DASHA_LEVEL as usize + 1],
        })
    }
}

impl Iterator for DashaIter {
    type Item = DashaPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        let period = self.stack.pop()?;
        let depth = period.level.depth();
        let idx = self.emitted_per_level[depth as usize];
        self.emitted_per_level[depth as usize] += 1;
        if depth < self.max_level {
            self.stack.extend(subdivide(&period, idx).into_iter().rev());
        }
        Some(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::vimshottari::full_years;
    use crate::graha::Graha;

    const BIRTH: f64 = 2_447_892.5;

    #[test]
    fn first_mahadasha_is_balance() {
        let periods = mahadashas(BIRTH, 50.0, 1).unwrap();
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].lord, Graha::Chandra);
        assert!((periods[0].duration_years - 2.5).abs() < 1e-12);
        assert_eq!(periods[1].lord, Graha::Mangal);
        assert_eq!(periods[1].duration_years, 7.0);
        assert_eq!(periods[0].start_jd, BIRTH);
    }

    #[test]
    fn second_cycle_repeats_lords() {
        let periods = mahadashas(BIRTH, 200.0, 2).unwrap();
        assert_eq!(periods.len(), 18);
        for i in 0..9 {
            assert_eq!(periods[i].lord, periods[i + 9].lord);
        }
        assert_eq!(periods[9].duration_years, full_years(periods[9].lord));
    }

    #[test]
    fn invalid_options_rejected() {
        let bad_level = DashaOptions { max_level: 5, cycles: 1 };
        assert!(dasha_hierarchy(BIRTH, 10.0, &bad_level).is_err());
        let bad_cycles = DashaOptions { max_level: 1, cycles: 3 };
        assert!(dasha_hierarchy(BIRTH, 10.0, &bad_cycles).is_err());
        assert!(mahadashas(f64::NAN, 10.0, 1).is_err());
    }

    #[test]
    fn hierarchy_level_sizes() {
        let h = dasha_hierarchy(BIRTH, 123.4, &DashaOptions::default()).unwrap();
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[0].len(), 9);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
    }

    #[test]
    fn iterator_matches_hierarchy() {
        let opts = DashaOptions { max_level: 2, cycles: 1 };
        let h = dasha_hierarchy(BIRTH, 77.7, &opts).unwrap();
        let walked: Vec<DashaPeriod> = DashaIter::new(BIRTH, 77.7, &opts).unwrap().collect();
        assert_eq!(walked.len(), 9 + 81 + 729);
        for depth in 0..=2u8 {
            let from_iter: Vec<&DashaPeriod> =
                walked.iter().filter(|p| p.level.depth() == depth).collect();
            let level = &h.levels[depth as usize];
            assert_eq!(from_iter.len(), level.len());
            for (a, b) in from_iter.iter().zip(level) {
                assert_eq!(*a, b);
            }
        }
    }

    #[test]
    fn iterator_is_lazy() {
        let opts = DashaOptions { max_level: 4, cycles: 2 };
        let first: Vec<DashaPeriod> = DashaIter::new(BIRTH, 5.0, &opts).unwrap().take(5).collect();
        let levels: Vec<u8> = first.iter().map(|p| p.level.depth()).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn snapshot_matches_hierarchy() {
        let opts = DashaOptions { max_level: 2, cycles: 1 };
        let h = dasha_hierarchy(BIRTH, 300.0, &opts).unwrap();
        let query = BIRTH + 40.0 * DAYS_PER_YEAR;
        let snap = dasha_snapshot(BIRTH, 300.0, query, &opts).unwrap();
        assert_eq!(snap.periods.len(), 3);
        for (depth, p) in snap.periods.iter().enumerate() {
            let idx = find_active_period(&h.levels[depth], query).unwrap();
            assert_eq!(*p, h.levels[depth][idx]);
        }
    }

    #[test]
    fn snapshot_before_birth_is_empty() {
        let snap = dasha_snapshot(BIRTH, 300.0, BIRTH - 1.0, &DashaOptions::default()).unwrap();
        assert!(snap.periods.is_empty());
    }
}
