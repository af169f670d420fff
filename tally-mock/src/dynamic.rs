use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use tally_core::source::{AnalysisProvider, FundHistoryProvider};
use tally_core::{
    AnalysisGroupColumn, AnalysisPage, CostRow, DeepRow, FundRow, LedgerSource, PeriodCostRow,
    PriceSnapshot, TallyError, TimeWindow,
};

/// Instruction for how a method should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(TallyError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    period_cost_rules: HashMap<AnalysisPage, MockBehavior<Vec<PeriodCostRow>>>,
    timeline_rules: HashMap<AnalysisPage, MockBehavior<Vec<CostRow>>>,
    deep_rules: HashMap<AnalysisPage, MockBehavior<Vec<DeepRow>>>,
    income_rule: Option<MockBehavior<i64>>,
    fund_rows_rule: Option<MockBehavior<Vec<FundRow>>>,
    snapshots_rule: Option<MockBehavior<Vec<PriceSnapshot>>>,
    windows: Vec<TimeWindow>,
    min_times: Vec<DateTime<Utc>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
///
/// Capabilities with no configured behavior answer with no rows.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `period_cost` calls for one category.
    pub async fn set_period_cost_behavior(
        &self,
        page: AnalysisPage,
        behavior: MockBehavior<Vec<PeriodCostRow>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.period_cost_rules.insert(page, behavior);
    }

    /// Set the behavior for `timeline_rows` calls for one category.
    pub async fn set_timeline_behavior(
        &self,
        page: AnalysisPage,
        behavior: MockBehavior<Vec<CostRow>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.timeline_rules.insert(page, behavior);
    }

    /// Set the behavior for `deep_rows` calls for one category.
    pub async fn set_deep_behavior(&self, page: AnalysisPage, behavior: MockBehavior<Vec<DeepRow>>) {
        let mut guard = self.state.lock().await;
        guard.deep_rules.insert(page, behavior);
    }

    /// Set the behavior for `income` calls.
    pub async fn set_income_behavior(&self, behavior: MockBehavior<i64>) {
        self.state.lock().await.income_rule = Some(behavior);
    }

    /// Set the behavior for `fund_rows` calls.
    pub async fn set_fund_rows_behavior(&self, behavior: MockBehavior<Vec<FundRow>>) {
        self.state.lock().await.fund_rows_rule = Some(behavior);
    }

    /// Set the snapshot store behind `snapshot_count_since` and `snapshots_since`.
    ///
    /// Returned snapshots are filtered to those strictly after the requested bound.
    pub async fn set_snapshots_behavior(&self, behavior: MockBehavior<Vec<PriceSnapshot>>) {
        self.state.lock().await.snapshots_rule = Some(behavior);
    }

    /// Windows passed to analysis calls, in call order.
    pub async fn requested_windows(&self) -> Vec<TimeWindow> {
        self.state.lock().await.windows.clone()
    }

    /// Lower bounds passed to snapshot calls, in call order.
    pub async fn requested_min_times(&self) -> Vec<DateTime<Utc>> {
        self.state.lock().await.min_times.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn LedgerSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn LedgerSource>, controller)
    }

    async fn log_window(&self, window: &TimeWindow) {
        self.state.lock().await.windows.push(window.clone());
    }

    async fn snapshots_after(
        &self,
        min_time: DateTime<Utc>,
    ) -> Result<Vec<PriceSnapshot>, TallyError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.min_times.push(min_time);
            guard.snapshots_rule.clone()
        };
        let all = play(behavior, Vec::new).await?;
        Ok(all.into_iter().filter(|s| s.time > min_time).collect())
    }
}

async fn play<T>(
    behavior: Option<MockBehavior<T>>,
    fallback: impl FnOnce() -> T,
) -> Result<T, TallyError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Ok(fallback()),
    }
}

impl LedgerSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_analysis_provider(&self) -> Option<&dyn AnalysisProvider> {
        Some(self as &dyn AnalysisProvider)
    }

    fn as_fund_history_provider(&self) -> Option<&dyn FundHistoryProvider> {
        Some(self as &dyn FundHistoryProvider)
    }
}

#[async_trait]
impl AnalysisProvider for DynamicMockSource {
    async fn period_cost(
        &self,
        page: AnalysisPage,
        _column: Option<AnalysisGroupColumn>,
        window: &TimeWindow,
    ) -> Result<Vec<PeriodCostRow>, TallyError> {
        self.log_window(window).await;
        let behavior = self.state.lock().await.period_cost_rules.get(&page).cloned();
        play(behavior, Vec::new).await
    }

    async fn timeline_rows(
        &self,
        page: AnalysisPage,
        window: &TimeWindow,
    ) -> Result<Vec<CostRow>, TallyError> {
        self.log_window(window).await;
        let behavior = self.state.lock().await.timeline_rules.get(&page).cloned();
        play(behavior, Vec::new).await
    }

    async fn income(&self, window: &TimeWindow) -> Result<i64, TallyError> {
        self.log_window(window).await;
        let behavior = self.state.lock().await.income_rule.clone();
        play(behavior, || 0).await
    }

    async fn deep_rows(
        &self,
        page: AnalysisPage,
        _column: AnalysisGroupColumn,
        window: &TimeWindow,
    ) -> Result<Vec<DeepRow>, TallyError> {
        self.log_window(window).await;
        let behavior = self.state.lock().await.deep_rules.get(&page).cloned();
        play(behavior, Vec::new).await
    }
}

#[async_trait]
impl FundHistoryProvider for DynamicMockSource {
    async fn fund_rows(&self) -> Result<Vec<FundRow>, TallyError> {
        let behavior = self.state.lock().await.fund_rows_rule.clone();
        play(behavior, Vec::new).await
    }

    async fn snapshot_count_since(&self, min_time: DateTime<Utc>) -> Result<usize, TallyError> {
        Ok(self.snapshots_after(min_time).await?.len())
    }

    async fn snapshots_since(
        &self,
        min_time: DateTime<Utc>,
    ) -> Result<Vec<PriceSnapshot>, TallyError> {
        self.snapshots_after(min_time).await
    }
}
