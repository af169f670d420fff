//! Dense, calendar-aligned structures produced by the aggregation engine.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::FundId;

/// A reporting window in local calendar time.
///
/// `start` is the first instant of the period and `end` its last millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First instant of the period.
    pub start: NaiveDateTime,
    /// Last instant of the period (23:59:59.999 on its final day).
    pub end: NaiveDateTime,
    /// Human label, e.g. "Week beginning September 4, 2017".
    pub description: String,
}

/// One slot per calendar day; each slot holds the per-category costs for that
/// day, or is empty when nothing was recorded.
pub type Timeline = Vec<Vec<i64>>;

/// One `(item, cost)` leaf of a deep group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepItem {
    /// Item name.
    pub item: String,
    /// Cost in minor currency units.
    pub cost: i64,
}

/// A run of adjacent deep rows sharing a group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepGroup {
    /// Shared group key.
    pub group_key: String,
    /// Items in input order.
    pub items: Vec<DeepItem>,
}

/// A contiguous run of observed prices for one fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceGroup {
    /// Snapshot index of the first value.
    pub start_index: usize,
    /// Prices observed at consecutive snapshots.
    pub values: Vec<Decimal>,
}

/// A fund's price history aligned to the snapshot index axis.
///
/// `prices[0]` corresponds to snapshot `start_index`. Gaps between
/// observations are zero-filled; the series stops at the last observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundPriceSeries {
    /// Holding id.
    pub fund_id: FundId,
    /// Dense prices, rounded to two decimal places.
    pub prices: Vec<Decimal>,
    /// Snapshot index of `prices[0]`; zero for a fund never observed.
    pub start_index: usize,
    /// The same observations split into contiguous runs.
    pub groups: Vec<PriceGroup>,
}

impl FundPriceSeries {
    /// A series for a fund with no observations.
    #[must_use]
    pub const fn empty(fund_id: FundId) -> Self {
        Self {
            fund_id,
            prices: Vec::new(),
            start_index: 0,
            groups: Vec::new(),
        }
    }

    /// Whether the fund was never observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
