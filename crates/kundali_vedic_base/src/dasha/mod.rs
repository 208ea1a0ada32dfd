//! Vimshottari dasha (planetary period) timelines.
//!
//! The Moon's nakshatra at birth picks the first Mahadasha lord and how much
//! of it remains. Mahadashas then follow the 9-lord cycle; each period
//! subdivides into 9 children by the same cycle, proportionally to the
//! lords' weights, down to Pranadasha (level 4).

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod timeline;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use query::{
    DashaNode, children_range, find_active_period, nest_hierarchy, snapshot_from_hierarchy,
    verify_hierarchy,
};
pub use subperiod::{snap_last_child_end, subdivide};
pub use timeline::{DashaIter, dasha_hierarchy, dasha_snapshot, mahadashas};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DURATION_TOLERANCE_YEARS, DashaHierarchy, DashaLevel,
    DashaOptions, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
pub use vimshottari::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, cycle_from, full_years};
