use chrono::{DateTime, Utc};
use futures::future::try_join;
use tally_core::{
    FundHistory, FundPeriod, TallyError, empty_fund_history, fund_max_age, process_fund_history,
    sample_snapshots,
};

use crate::Tally;
use crate::core::with_request_deadline;

impl Tally {
    /// Fetch the fund price history of the user's holdings.
    ///
    /// Snapshots newer than the look-back bound for `period` and `length` are
    /// counted first. With fewer than the configured minimum the history is
    /// considered too thin to chart and every holding gets an empty series.
    /// Otherwise the snapshots are thinned to the configured resolution and
    /// aligned per fund.
    ///
    /// # Errors
    /// `Unsupported` if the source has no fund history capability,
    /// `SourceTimeout` or a source error if any call fails, `RequestTimeout`
    /// if the overall deadline passes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tally::router",
            skip(self),
            fields(period = %period, length = length),
        )
    )]
    pub async fn fund_history(
        &self,
        period: FundPeriod,
        length: u32,
        now: DateTime<Utc>,
    ) -> Result<FundHistory, TallyError> {
        let max_age = fund_max_age(now, period, length)?;
        let provider = self.fund_history_provider()?;
        let name = self.source.name();
        let timeout = self.cfg.source_timeout;

        let fetch = async {
            let (fund_rows, available) = try_join(
                Self::source_call_with_timeout(name, "fund_rows", timeout, provider.fund_rows()),
                Self::source_call_with_timeout(
                    name,
                    "snapshot_count_since",
                    timeout,
                    provider.snapshot_count_since(max_age),
                ),
            )
            .await?;

            if available < self.cfg.min_fund_history_rows {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "tally::router",
                    available,
                    min = self.cfg.min_fund_history_rows,
                    "fund history too thin, returning empty series"
                );
                return Ok(empty_fund_history(&fund_rows, max_age));
            }

            let snapshots = Self::source_call_with_timeout(
                name,
                "snapshots_since",
                timeout,
                provider.snapshots_since(max_age),
            )
            .await?;
            let sampled = sample_snapshots(snapshots, self.cfg.fund_history_resolution);
            Ok::<_, TallyError>(process_fund_history(&fund_rows, max_age, &sampled))
        };

        with_request_deadline(self.cfg.request_timeout, fetch)
            .await
            .map_err(|_| TallyError::request_timeout("fund history"))?
    }
}
