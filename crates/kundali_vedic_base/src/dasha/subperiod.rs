//! Proportional subdivision of a period by the lord cycle.
//!
//! One function serves every depth: a parent of duration D splits into 9
//! children starting from its own lord, child i lasting
//! `D · years_i / 120`. The last child's end is snapped to the parent's end
//! so boundaries tile exactly.

use super::types::{DAYS_PER_YEAR, DashaPeriod};
use super::vimshottari::{VIMSHOTTARI_TOTAL_YEARS, cycle_from};

/// Children of `parent`, or an empty vector at the deepest level.
///
/// `parent_idx` is the parent's index in its own level array.
pub fn subdivide(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let mut children: Vec<DashaPeriod> = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;
    for (order_0, (lord, years)) in cycle_from(parent.lord).enumerate() {
        let duration_years = parent.duration_years * years / VIMSHOTTARI_TOTAL_YEARS;
        let end = cursor + duration_years * DAYS_PER_YEAR;
        children.push(DashaPeriod {
            lord,
            level: child_level,
            start_jd: cursor,
            end_jd: end,
            duration_years,
            order: order_0 as u16 + 1,
            parent_idx: Some(parent_idx),
        });
        cursor = end;
    }
    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Snap the last child's end to the parent's end to absorb rounding drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DashaLevel;
    use crate::graha::Graha;

    fn maha(lord: Graha, years: f64) -> DashaPeriod {
        DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + years * DAYS_PER_YEAR,
            duration_years: years,
            order: 1,
            parent_idx: None,
        }
    }

    #[test]
    fn children_start_from_parent_lord() {
        let kids = subdivide(&maha(Graha::Guru, 16.0), 6);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].lord, Graha::Guru);
        assert_eq!(kids[1].lord, Graha::Shani);
        assert!(kids.iter().all(|k| k.parent_idx == Some(6)));
        assert!(kids.iter().all(|k| k.level == DashaLevel::Antardasha));
    }

    #[test]
    fn proportional_not_equal() {
        // Venus/Venus antardasha of a full 20-year Venus Mahadasha: 20·20/120.
        let kids = subdivide(&maha(Graha::Shukra, 20.0), 0);
        assert!((kids[0].duration_years - 20.0 * 20.0 / 120.0).abs() < 1e-12);
        // Venus/Sun: 20·6/120 = 1 year.
        assert!((kids[1].duration_years - 1.0).abs() < 1e-12);
    }

    #[test]
    fn children_tile_parent() {
        let parent = maha(Graha::Rahu, 18.0);
        let kids = subdivide(&parent, 0);
        assert_eq!(kids[0].start_jd, parent.start_jd);
        assert_eq!(kids[8].end_jd, parent.end_jd);
        for w in kids.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
        let sum: f64 = kids.iter().map(|k| k.duration_years).sum();
        assert!((sum - parent.duration_years).abs() < 1e-9);
    }

    #[test]
    fn deepest_level_has_no_children() {
        let mut p = maha(Graha::Ketu, 0.01);
        p.level = DashaLevel::Pranadasha;
        assert!(subdivide(&p, 0).is_empty());
    }
}
