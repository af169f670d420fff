use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use tally_core::source::{AnalysisProvider, FundHistoryProvider};
use tally_core::{AnalysisPage, LedgerSource, TallyConfig, TallyError};

/// Orchestrator that fetches rows from a ledger source and runs the aggregation engine.
pub struct Tally {
    pub(crate) source: Arc<dyn LedgerSource>,
    pub(crate) cfg: TallyConfig,
}

/// Builder for constructing a `Tally` orchestrator with custom configuration.
pub struct TallyBuilder {
    source: Option<Arc<dyn LedgerSource>>,
    cfg: TallyConfig,
}

impl Default for TallyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyBuilder {
    /// Create a new builder with default configuration and no source.
    ///
    /// A source must be registered via [`with_source`](Self::with_source)
    /// before [`build`](Self::build) succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: TallyConfig::default(),
        }
    }

    /// Register the ledger source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn LedgerSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the category processing order.
    ///
    /// The order decides each category's index in the per-day cost tree, so
    /// changing it changes how day slots are padded.
    #[must_use]
    pub fn categories(mut self, categories: &[AnalysisPage]) -> Self {
        self.cfg.categories = categories.to_vec();
        self
    }

    /// Set the zone in which reference instants are read as calendar time.
    #[must_use]
    pub const fn timezone(mut self, tz: chrono_tz::Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Set the target number of snapshots kept when charting fund history.
    #[must_use]
    pub const fn fund_history_resolution(mut self, resolution: usize) -> Self {
        self.cfg.fund_history_resolution = resolution;
        self
    }

    /// Set the snapshot count below which fund history is returned empty.
    #[must_use]
    pub const fn min_fund_history_rows(mut self, rows: usize) -> Self {
        self.cfg.min_fund_history_rows = rows;
        self
    }

    /// Set the timeout applied to each individual source call.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set an overall timeout for requests that fan out to several source calls.
    ///
    /// When exceeded, returns a `RequestTimeout` error for the capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Tally` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered, if the category
    /// list is empty or repeats a category, or if the fund history resolution is zero.
    pub fn build(self) -> Result<Tally, TallyError> {
        let Some(source) = self.source else {
            return Err(TallyError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            ));
        };

        if self.cfg.categories.is_empty() {
            return Err(TallyError::InvalidArg(
                "at least one category is required".to_string(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = self.cfg.categories.iter().find(|c| !seen.insert(**c)) {
            return Err(TallyError::InvalidArg(format!(
                "category {dup} listed more than once"
            )));
        }
        if self.cfg.fund_history_resolution == 0 {
            return Err(TallyError::InvalidArg(
                "fund history resolution must be positive".to_string(),
            ));
        }

        Ok(Tally {
            source,
            cfg: self.cfg,
        })
    }
}

/// Attribute a source failure to the source that produced it.
///
/// Errors that already carry attribution or a structured meaning pass through.
pub fn tag_err(source: &str, e: TallyError) -> TallyError {
    match e {
        e @ (TallyError::NotFound { .. }
        | TallyError::SourceTimeout { .. }
        | TallyError::Source { .. }
        | TallyError::RequestTimeout { .. }
        | TallyError::Unsupported { .. }) => e,
        other => TallyError::Source {
            name: source.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Bound a future by an optional request-level deadline.
///
/// On timeout returns `RequestTimeout` labelled "request"; call sites remap
/// the label to their capability.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, TallyError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| TallyError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Tally {
    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tally::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, TallyError>
    where
        Fut: core::future::Future<Output = Result<T, TallyError>>,
    {
        match tokio::time::timeout(timeout, fut).await {
            Ok(res) => res.map_err(|e| tag_err(source_name, e)),
            Err(_) => Err(TallyError::source_timeout(source_name, capability)),
        }
    }

    /// Start building a new `Tally` instance.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use tally::Tally;
    /// use tally_mock::MockSource;
    ///
    /// let tally = Tally::builder()
    ///     .with_source(Arc::new(MockSource::new()))
    ///     .timezone(chrono_tz::Europe::London)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(tally.config().timezone, chrono_tz::Europe::London);
    /// ```
    #[must_use]
    pub fn builder() -> TallyBuilder {
        TallyBuilder::new()
    }

    /// The configuration this orchestrator was built with.
    #[must_use]
    pub const fn config(&self) -> &TallyConfig {
        &self.cfg
    }

    /// Read an absolute instant as calendar time in the configured zone.
    pub(crate) fn local_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.cfg.timezone).naive_local()
    }

    pub(crate) fn analysis_provider(&self) -> Result<&dyn AnalysisProvider, TallyError> {
        self.source
            .as_analysis_provider()
            .ok_or_else(|| TallyError::unsupported("analysis"))
    }

    pub(crate) fn fund_history_provider(&self) -> Result<&dyn FundHistoryProvider, TallyError> {
        self.source
            .as_fund_history_provider()
            .ok_or_else(|| TallyError::unsupported("fund history"))
    }
}
