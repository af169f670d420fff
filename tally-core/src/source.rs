use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    AnalysisGroupColumn, AnalysisPage, CostRow, DeepRow, FundRow, PeriodCostRow, PriceSnapshot,
    TallyError, TimeWindow,
};

/// Focused role trait for sources that serve spending rows for analysis pages.
///
/// Every call is scoped to the user the source was constructed for, and to
/// rows dated within `window` (inclusive on both ends).
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Costs of one category summed per value of `column`.
    ///
    /// With `column = None` the source returns a single row holding the
    /// category total. Callers resolve the column with `category_column`,
    /// which never yields `None` for bills.
    async fn period_cost(
        &self,
        page: AnalysisPage,
        column: Option<AnalysisGroupColumn>,
        window: &TimeWindow,
    ) -> Result<Vec<PeriodCostRow>, TallyError>;

    /// Costs of one category summed per calendar day.
    async fn timeline_rows(
        &self,
        page: AnalysisPage,
        window: &TimeWindow,
    ) -> Result<Vec<CostRow>, TallyError>;

    /// Total income recorded in the window.
    async fn income(&self, window: &TimeWindow) -> Result<i64, TallyError>;

    /// Costs of one category summed per `(column value, item)`.
    ///
    /// REQUIRED: rows sharing a column value must be contiguous.
    async fn deep_rows(
        &self,
        page: AnalysisPage,
        column: AnalysisGroupColumn,
        window: &TimeWindow,
    ) -> Result<Vec<DeepRow>, TallyError>;
}

/// Focused role trait for sources that serve fund holdings and scraped prices.
#[async_trait]
pub trait FundHistoryProvider: Send + Sync {
    /// The user's fund holdings in display order.
    async fn fund_rows(&self) -> Result<Vec<FundRow>, TallyError>;

    /// Number of completed price snapshots strictly after `min_time`.
    async fn snapshot_count_since(&self, min_time: DateTime<Utc>) -> Result<usize, TallyError>;

    /// Completed price snapshots strictly after `min_time`.
    ///
    /// REQUIRED: ascending by time, ids unique within each snapshot.
    async fn snapshots_since(
        &self,
        min_time: DateTime<Utc>,
    ) -> Result<Vec<PriceSnapshot>, TallyError>;
}

/// A ledger backend that supplies already-fetched rows to the aggregation engine.
///
/// Capabilities are advertised by returning trait object references; the
/// defaults advertise nothing.
pub trait LedgerSource: Send + Sync {
    /// A stable identifier used in errors and logs (e.g. "tally-postgres").
    fn name(&self) -> &'static str;

    /// Advertise analysis capability.
    fn as_analysis_provider(&self) -> Option<&dyn AnalysisProvider> {
        None
    }

    /// Advertise fund history capability.
    fn as_fund_history_provider(&self) -> Option<&dyn FundHistoryProvider> {
        None
    }
}
