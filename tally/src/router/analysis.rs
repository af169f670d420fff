use chrono::{DateTime, Utc};
use futures::future::{try_join, try_join_all};
use tally_core::{
    AnalysisGroupBy, AnalysisGroupColumn, AnalysisPage, AnalysisPeriod, AnalysisReport,
    CategoryCostTree, CostItem, CostRow, DeepGroup, PeriodCostRow, TallyError, TimeWindow,
    build_cost_tree, category_column, densify_timeline, group_deep_rows, resolve_period,
};

use crate::Tally;
use crate::core::with_request_deadline;

struct CategoryRows {
    page: AnalysisPage,
    costs: Vec<PeriodCostRow>,
    days: Vec<CostRow>,
}

impl CategoryRows {
    fn into_cost_tree(self) -> CategoryCostTree {
        CategoryCostTree {
            page: self.page,
            tree: self
                .costs
                .into_iter()
                .map(|r| CostItem {
                    category: r.column,
                    sum: r.cost,
                })
                .collect(),
        }
    }
}

impl Tally {
    fn window(
        &self,
        period: AnalysisPeriod,
        page: u32,
        now: DateTime<Utc>,
    ) -> Result<TimeWindow, TallyError> {
        resolve_period(self.local_time(now), period, page)
    }

    /// Summarize spending over one analysis window.
    ///
    /// The window is `page` periods before the one containing `now`, read in
    /// the configured timezone. For every configured category the source is
    /// asked for grouped costs and per-day costs; income comes from one more
    /// call. All calls run concurrently.
    ///
    /// - `cost` lists one entry per category in configured order.
    /// - `timeline` is the dense per-day cost list, `None` for weeks.
    /// - `saved` is income minus total cost, floored at zero.
    ///
    /// # Errors
    /// `Unsupported` if the source has no analysis capability, `SourceTimeout`
    /// or a source error if any call fails, `RequestTimeout` if the overall
    /// deadline passes, `InvalidArg` if `page` leaves the calendar range.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tally::router",
            skip(self),
            fields(period = %period, page = page),
        )
    )]
    pub async fn analysis(
        &self,
        period: AnalysisPeriod,
        group_by: Option<AnalysisGroupBy>,
        page: u32,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport, TallyError> {
        let window = self.window(period, page, now)?;
        let provider = self.analysis_provider()?;
        let name = self.source.name();
        let timeout = self.cfg.source_timeout;

        let per_category = self.cfg.categories.iter().map(|&category| {
            let window = &window;
            async move {
                let column = category_column(category, group_by);
                let (costs, days) = try_join(
                    Self::source_call_with_timeout(
                        name,
                        "period_cost",
                        timeout,
                        provider.period_cost(category, column, window),
                    ),
                    Self::source_call_with_timeout(
                        name,
                        "timeline_rows",
                        timeout,
                        provider.timeline_rows(category, window),
                    ),
                )
                .await?;
                Ok::<_, TallyError>(CategoryRows {
                    page: category,
                    costs,
                    days,
                })
            }
        });
        let income = Self::source_call_with_timeout(
            name,
            "income",
            timeout,
            provider.income(&window),
        );

        let (categories, income) = with_request_deadline(
            self.cfg.request_timeout,
            try_join(try_join_all(per_category), income),
        )
        .await
        .map_err(|_| TallyError::request_timeout("analysis"))??;

        let tree = build_cost_tree(categories.iter().map(|c| c.days.as_slice()));
        let timeline = densify_timeline(&tree, period, window.start.date());

        let cost: Vec<CategoryCostTree> = categories
            .into_iter()
            .map(CategoryRows::into_cost_tree)
            .collect();
        let total: i64 = cost.iter().map(CategoryCostTree::total).sum();
        let saved = income.saturating_sub(total).max(0);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "tally::router",
            categories = cost.len(),
            days = tree.len(),
            income,
            total,
            "analysis assembled"
        );

        Ok(AnalysisReport {
            timeline,
            cost,
            income,
            saved,
            description: window.description,
            start: window.start,
            end: window.end,
        })
    }

    /// Break one category down into groups of items over an analysis window.
    ///
    /// Rows come back from the source already ordered with equal group keys
    /// adjacent and are run-length grouped in that order.
    ///
    /// # Errors
    /// `Unsupported` if the source has no analysis capability, `SourceTimeout`
    /// or a source error if the call fails, `InvalidArg` if `page` leaves the
    /// calendar range.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tally::router",
            skip(self),
            fields(category = %category, period = %period, page = page),
        )
    )]
    pub async fn analysis_deep(
        &self,
        category: AnalysisPage,
        period: AnalysisPeriod,
        group_by: AnalysisGroupBy,
        page: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<DeepGroup>, TallyError> {
        let window = self.window(period, page, now)?;
        let provider = self.analysis_provider()?;
        let column =
            category_column(category, Some(group_by)).unwrap_or(AnalysisGroupColumn::Item);

        let rows = Self::source_call_with_timeout(
            self.source.name(),
            "deep_rows",
            self.cfg.source_timeout,
            provider.deep_rows(category, column, &window),
        )
        .await?;
        Ok(group_deep_rows(rows))
    }
}
