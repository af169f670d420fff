//! Deterministic ledger sources for tests and examples.
//!
//! [`MockSource`] serves a fixed in-memory ledger. [`DynamicMockSource`] is
//! driven from the outside through a [`DynamicMockController`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tally_core::source::{AnalysisProvider, FundHistoryProvider};
use tally_core::{
    AnalysisGroupColumn, AnalysisPage, CostRow, DeepRow, FundRow, LedgerSource, PeriodCostRow,
    PriceSnapshot, TallyError, TimeWindow,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

fn in_window(date: NaiveDate, window: &TimeWindow) -> bool {
    date >= window.start.date() && date <= window.end.date()
}

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create a new mock source over the built-in fixtures.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn entries(
        page: AnalysisPage,
        window: &TimeWindow,
    ) -> impl Iterator<Item = fixtures::ledger::Entry> + '_ {
        fixtures::ledger::entries()
            .into_iter()
            .filter(move |e| e.page == page && in_window(e.date, window))
    }
}

impl LedgerSource for MockSource {
    fn name(&self) -> &'static str {
        "tally-mock"
    }

    fn as_analysis_provider(&self) -> Option<&dyn AnalysisProvider> {
        Some(self as &dyn AnalysisProvider)
    }

    fn as_fund_history_provider(&self) -> Option<&dyn FundHistoryProvider> {
        Some(self as &dyn FundHistoryProvider)
    }
}

#[async_trait]
impl AnalysisProvider for MockSource {
    async fn period_cost(
        &self,
        page: AnalysisPage,
        column: Option<AnalysisGroupColumn>,
        window: &TimeWindow,
    ) -> Result<Vec<PeriodCostRow>, TallyError> {
        let mut sums: BTreeMap<&'static str, i64> = BTreeMap::new();
        for e in Self::entries(page, window) {
            let key = column.map_or(page.as_str(), |c| e.column(c));
            *sums.entry(key).or_default() += e.cost;
        }
        Ok(sums
            .into_iter()
            .map(|(column, cost)| PeriodCostRow {
                column: column.to_string(),
                cost,
            })
            .collect())
    }

    async fn timeline_rows(
        &self,
        page: AnalysisPage,
        window: &TimeWindow,
    ) -> Result<Vec<CostRow>, TallyError> {
        let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for e in Self::entries(page, window) {
            *by_day.entry(e.date).or_default() += e.cost;
        }
        Ok(by_day
            .into_iter()
            .map(|(date, cost)| CostRow::new(date, cost))
            .collect())
    }

    async fn income(&self, window: &TimeWindow) -> Result<i64, TallyError> {
        Ok(fixtures::ledger::income()
            .into_iter()
            .filter(|(date, _)| in_window(*date, window))
            .map(|(_, cost)| cost)
            .sum())
    }

    async fn deep_rows(
        &self,
        page: AnalysisPage,
        column: AnalysisGroupColumn,
        window: &TimeWindow,
    ) -> Result<Vec<DeepRow>, TallyError> {
        let mut sums: BTreeMap<(&'static str, &'static str), i64> = BTreeMap::new();
        for e in Self::entries(page, window) {
            *sums.entry((e.column(column), e.item)).or_default() += e.cost;
        }
        // keyed by (group, item), so equal groups come out contiguous
        Ok(sums
            .into_iter()
            .map(|((group, item), cost)| DeepRow::new(group, item, cost))
            .collect())
    }
}

#[async_trait]
impl FundHistoryProvider for MockSource {
    async fn fund_rows(&self) -> Result<Vec<FundRow>, TallyError> {
        Ok(fixtures::funds::holdings())
    }

    async fn snapshot_count_since(&self, min_time: DateTime<Utc>) -> Result<usize, TallyError> {
        Ok(fixtures::funds::snapshots()
            .iter()
            .filter(|s| s.time > min_time)
            .count())
    }

    async fn snapshots_since(
        &self,
        min_time: DateTime<Utc>,
    ) -> Result<Vec<PriceSnapshot>, TallyError> {
        Ok(fixtures::funds::snapshots()
            .into_iter()
            .filter(|s| s.time > min_time)
            .collect())
    }
}
