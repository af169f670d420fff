use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{Datelike, NaiveDate};

use crate::CostRow;

/// Per-day cost lists keyed by calendar date.
///
/// Conceptually a `year -> month (0-11) -> day (1-31) -> [cost]` tree, stored
/// flat under a single date key. The list at a date holds one value per
/// category that touched the date, prefixed with zeros for the categories
/// whose index precedes the first category to touch it. It is not a
/// fixed-width per-category slot: a later category that skipped the date
/// simply does not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostTree {
    days: BTreeMap<NaiveDate, Vec<i64>>,
}

/// Nested `year -> month (0-11) -> day -> costs` view of a [`CostTree`].
pub type NestedCostTree = BTreeMap<i32, BTreeMap<u32, BTreeMap<u32, Vec<i64>>>>;

impl CostTree {
    /// Costs recorded on a date, addressed as `(year, zero-based month, day)`.
    #[must_use]
    pub fn get(&self, year: i32, month0: u32, day: u32) -> Option<&[i64]> {
        let date = NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day)?;
        self.on(date)
    }

    /// Costs recorded on `date`.
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> Option<&[i64]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Dates with recorded costs, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[i64])> + '_ {
        self.days.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    /// Number of distinct dates with recorded costs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no category recorded any cost.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Expand into the nested year/month/day form consumed by chart clients.
    #[must_use]
    pub fn nested(&self) -> NestedCostTree {
        let mut out = NestedCostTree::new();
        for (date, costs) in &self.days {
            out.entry(date.year())
                .or_default()
                .entry(date.month0())
                .or_default()
                .insert(date.day(), costs.clone());
        }
        out
    }
}

/// Fold per-category cost rows into a date-keyed [`CostTree`].
///
/// Categories are processed in iteration order and their position is their
/// index. For each row:
/// - if the date has no entry yet, it is seeded with `index` zeros before the
///   row's cost is appended;
/// - otherwise the cost is appended to the existing list without re-padding.
///
/// ```
/// use chrono::NaiveDate;
/// use tally_core::{CostRow, build_cost_tree};
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2016, m, day).unwrap();
/// let tree = build_cost_tree([
///     vec![CostRow::new(d(12, 6), 10)],
///     vec![],
///     vec![CostRow::new(d(4, 4), 3)],
/// ]);
/// assert_eq!(tree.get(2016, 3, 4), Some(&[0, 0, 3][..]));
/// assert_eq!(tree.get(2016, 11, 6), Some(&[10][..]));
/// ```
pub fn build_cost_tree<I, R>(categories: I) -> CostTree
where
    I: IntoIterator<Item = R>,
    R: AsRef<[CostRow]>,
{
    let mut days: BTreeMap<NaiveDate, Vec<i64>> = BTreeMap::new();
    #[cfg(feature = "tracing")]
    let mut rows_seen = 0usize;

    for (index, rows) in categories.into_iter().enumerate() {
        for row in rows.as_ref() {
            match days.entry(row.date) {
                Entry::Vacant(v) => {
                    let mut costs = vec![0; index];
                    costs.push(row.cost);
                    v.insert(costs);
                }
                Entry::Occupied(mut o) => o.get_mut().push(row.cost),
            }
        }
        #[cfg(feature = "tracing")]
        {
            rows_seen += rows.as_ref().len();
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "tally::timeseries",
        rows = rows_seen,
        dates = days.len(),
        "built cost tree"
    );

    CostTree { days }
}
