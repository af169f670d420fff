//! Already-fetched ledger rows handed to the aggregation engine.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a fund holding.
pub type FundId = i64;

/// One category's summed cost on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRow {
    /// Calendar day the cost was recorded on.
    pub date: NaiveDate,
    /// Cost in minor currency units.
    pub cost: i64,
}

impl CostRow {
    /// Construct a cost row.
    #[must_use]
    pub const fn new(date: NaiveDate, cost: i64) -> Self {
        Self { date, cost }
    }
}

/// A category's cost summed over one value of its grouping column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCostRow {
    /// Value of the grouping column (item, category or shop name).
    pub column: String,
    /// Cost in minor currency units.
    pub cost: i64,
}

/// A flat `(group, item, cost)` row for the deep category breakdown.
///
/// Sources must return these with equal `group_key`s contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepRow {
    /// Grouping column value.
    pub group_key: String,
    /// Item name within the group.
    pub item: String,
    /// Cost in minor currency units.
    pub cost: i64,
}

impl DeepRow {
    /// Construct a deep row.
    pub fn new(group_key: impl Into<String>, item: impl Into<String>, cost: i64) -> Self {
        Self {
            group_key: group_key.into(),
            item: item.into(),
            cost,
        }
    }
}

/// Fund prices sampled at one instant.
///
/// `ids` and `prices` are parallel and of equal length; ids are unique
/// within a snapshot. Sequences of snapshots are expected in ascending `time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Instant the prices were scraped.
    pub time: DateTime<Utc>,
    /// Fund ids present in this snapshot.
    pub ids: Vec<FundId>,
    /// Price for each entry of `ids`.
    pub prices: Vec<Decimal>,
}

impl PriceSnapshot {
    /// Build a snapshot from `(id, price)` pairs.
    pub fn from_pairs<I>(time: DateTime<Utc>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (FundId, Decimal)>,
    {
        let (ids, prices) = pairs.into_iter().unzip();
        Self { time, ids, prices }
    }

    /// Iterate the `(id, price)` observations of this snapshot in order.
    pub fn observations(&self) -> impl Iterator<Item = (FundId, Decimal)> + '_ {
        self.ids.iter().copied().zip(self.prices.iter().copied())
    }
}

/// A fund holding owned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRow {
    /// Holding id, matched against snapshot ids.
    pub id: FundId,
    /// Fund name.
    pub item: String,
}

impl FundRow {
    /// Construct a fund row.
    pub fn new(id: FundId, item: impl Into<String>) -> Self {
        Self {
            id,
            item: item.into(),
        }
    }
}
