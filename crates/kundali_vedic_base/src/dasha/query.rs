//! Lookups and consistency checks over generated periods.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

use super::types::{
    DAYS_PER_YEAR, DURATION_TOLERANCE_YEARS, DashaHierarchy, DashaPeriod, DashaSnapshot,
};
use super::vimshottari::full_years;

/// Index of the first period whose `[start, end)` contains `jd`.
///
/// Periods are contiguous and sorted, so a binary search suffices.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Range of `level` holding the children of parent `parent_idx`.
///
/// Levels are ordered by parent, so the children form one contiguous run.
pub fn children_range(level: &[DashaPeriod], parent_idx: u32) -> Range<usize> {
    let start = level.partition_point(|c| c.parent_idx < Some(parent_idx));
    let end = level.partition_point(|c| c.parent_idx <= Some(parent_idx));
    start..end
}

/// Active chain from an already materialized hierarchy.
pub fn snapshot_from_hierarchy(hierarchy: &DashaHierarchy, query_jd: f64) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(hierarchy.levels.len());
    let mut parent: Option<u32> = None;
    for level in &hierarchy.levels {
        let range = match parent {
            None => 0..level.len(),
            Some(p) => children_range(level, p),
        };
        let Some(i) = find_active_period(&level[range.clone()], query_jd) else {
            break;
        };
        let level_idx = range.start + i;
        periods.push(level[level_idx]);
        parent = Some(level_idx as u32);
    }
    DashaSnapshot { query_jd, periods }
}

/// Check the tiling and duration rules of a hierarchy.
///
/// - after the birth balance every Mahadasha runs its lord's full period;
/// - siblings are contiguous and start/end with their parent;
/// - children's durations sum to the parent's within
///   [`DURATION_TOLERANCE_YEARS`].
pub fn verify_hierarchy(hierarchy: &DashaHierarchy) -> Result<(), VedicError> {
    let Some(level0) = hierarchy.levels.first() else {
        return Err(VedicError::InvariantViolation("dasha hierarchy has no levels".into()));
    };
    let Some(first) = level0.first() else {
        return Err(VedicError::InvariantViolation("no mahadashas generated".into()));
    };
    if first.duration_years > full_years(first.lord) + DURATION_TOLERANCE_YEARS {
        return Err(VedicError::InvariantViolation(format!(
            "birth balance {} exceeds the full {} period",
            first.duration_years, first.lord
        )));
    }
    for p in &level0[1..] {
        check_close(p.duration_years, full_years(p.lord), "mahadasha length")?;
    }
    for w in level0.windows(2) {
        if w[0].end_jd != w[1].start_jd {
            return Err(VedicError::InvariantViolation(format!(
                "gap between mahadashas {} and {}",
                w[0].order, w[1].order
            )));
        }
    }
    for depth in 1..hierarchy.levels.len() {
        let parents = &hierarchy.levels[depth - 1];
        let children = &hierarchy.levels[depth];
        for (pidx, parent) in parents.iter().enumerate() {
            verify_children(parent, &children[children_range(children, pidx as u32)])?;
        }
    }
    Ok(())
}

fn verify_children(parent: &DashaPeriod, kids: &[DashaPeriod]) -> Result<(), VedicError> {
    let (Some(first), Some(last)) = (kids.first(), kids.last()) else {
        return Err(VedicError::InvariantViolation(format!(
            "{} {} has no children",
            parent.level.name(),
            parent.lord
        )));
    };
    let sum: f64 = kids.iter().map(|k| k.duration_years).sum();
    check_close(sum, parent.duration_years, "children duration sum")?;
    let span_years = (last.end_jd - first.start_jd) / DAYS_PER_YEAR;
    check_close(span_years, parent.duration_years, "children span")?;
    if first.start_jd != parent.start_jd || last.end_jd != parent.end_jd {
        return Err(VedicError::InvariantViolation(format!(
            "children of {} {} do not share its boundaries",
            parent.level.name(),
            parent.lord
        )));
    }
    Ok(())
}

fn check_close(actual: f64, expected: f64, what: &str) -> Result<(), VedicError> {
    if (actual - expected).abs() > DURATION_TOLERANCE_YEARS {
        return Err(VedicError::InvariantViolation(format!(
            "{what}: {actual} years, expected {expected}"
        )));
    }
    Ok(())
}

/// A period with its sub-periods nested inside, for report output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaNode {
    #[serde(flatten)]
    pub period: DashaPeriod,
    /// Whether the reference instant falls inside this period.
    pub active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<DashaNode>,
}

/// Nest a hierarchy's flat levels, marking the chain active at `now_jd`.
pub fn nest_hierarchy(hierarchy: &DashaHierarchy, now_jd: f64) -> Vec<DashaNode> {
    fn build(levels: &[Vec<DashaPeriod>], depth: usize, idx: usize, now_jd: f64) -> DashaNode {
        let period = levels[depth][idx];
        let children = levels
            .get(depth + 1)
            .map(|next| {
                children_range(next, idx as u32)
                    .map(|ci| build(levels, depth + 1, ci, now_jd))
                    .collect()
            })
            .unwrap_or_default();
        DashaNode {
            active: period.contains(now_jd),
            period,
            children,
        }
    }
    (0..hierarchy.levels.first().map_or(0, Vec::len))
        .map(|i| build(&hierarchy.levels, 0, i, now_jd))
        .collect()
}
