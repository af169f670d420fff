use chrono::{Datelike, NaiveDate};

use super::tree::CostTree;
use crate::{AnalysisPeriod, Timeline};

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (`month` is 1-based), leap-year aware.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn push_month(out: &mut Timeline, tree: &CostTree, year: i32, month: u32) {
    let month0 = month - 1;
    out.extend(
        (1..=days_in_month(year, month))
            .map(|day| tree.get(year, month0, day).map(<[i64]>::to_vec).unwrap_or_default()),
    );
}

/// Expand a cost tree into one slot per calendar day of the window starting at `start`.
///
/// - `Year`: the twelve months of `start`'s year, 365 or 366 slots.
/// - `Month`: every day of `start`'s month.
/// - `Week`: `None`; timelines are not drawn at week granularity.
///
/// Slot `i` holds the tree's list for day `i + 1` of the period, or an empty
/// list when nothing was recorded.
#[must_use]
pub fn densify_timeline(
    tree: &CostTree,
    period: AnalysisPeriod,
    start: NaiveDate,
) -> Option<Timeline> {
    let year = start.year();
    let mut out = Timeline::new();
    match period {
        AnalysisPeriod::Week => return None,
        AnalysisPeriod::Month => push_month(&mut out, tree, year, start.month()),
        AnalysisPeriod::Year => {
            for month in 1..=12 {
                push_month(&mut out, tree, year, month);
            }
        }
    }
    Some(out)
}
