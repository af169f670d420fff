//! Report envelopes produced by the orchestrator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::category::AnalysisPage;
use crate::series::{FundPriceSeries, Timeline};

/// One grouped cost inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Value of the grouping column.
    pub category: String,
    /// Summed cost in minor currency units.
    pub sum: i64,
}

/// A category together with its grouped costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCostTree {
    /// The category.
    pub page: AnalysisPage,
    /// Grouped costs in source order.
    pub tree: Vec<CostItem>,
}

impl CategoryCostTree {
    /// Total cost of this category.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.tree.iter().map(|c| c.sum).sum()
    }
}

/// Summary of spending over one analysis window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Per-day costs; `None` at week granularity.
    pub timeline: Option<Timeline>,
    /// Grouped costs, one entry per configured category in order.
    pub cost: Vec<CategoryCostTree>,
    /// Income recorded in the window.
    pub income: i64,
    /// Income left after costs, floored at zero.
    pub saved: i64,
    /// Window label.
    pub description: String,
    /// First instant of the window.
    pub start: NaiveDateTime,
    /// Last instant of the window.
    pub end: NaiveDateTime,
}

/// Fund price history aligned to a shared snapshot axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundHistory {
    /// Unix seconds of the first snapshot, or of the look-back bound when
    /// there are no snapshots.
    pub start_time: i64,
    /// Seconds of each snapshot after the first; starts at zero.
    pub cache_times: Vec<i64>,
    /// One series per fund row, in fund-row order.
    pub data: Vec<FundPriceSeries>,
}
