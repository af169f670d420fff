//! Configuration shared by the orchestrator and its builder.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::category::AnalysisPage;

/// Global configuration for the `Tally` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Category processing order.
    ///
    /// The position of a category in this list is its index when building the
    /// per-day cost tree, so reordering changes how day slots are padded.
    pub categories: Vec<AnalysisPage>,
    /// Zone in which the reference instant is read when resolving windows.
    pub timezone: chrono_tz::Tz,
    /// Target number of snapshots to keep when charting fund history.
    pub fund_history_resolution: usize,
    /// Below this many snapshots the fund history is returned empty.
    pub min_fund_history_rows: usize,
    /// Timeout for individual source calls.
    pub source_timeout: Duration,
    /// Optional overall bound for requests that fan out to several source calls.
    pub request_timeout: Option<Duration>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            categories: AnalysisPage::ALL.to_vec(),
            timezone: chrono_tz::UTC,
            fund_history_resolution: 100,
            min_fund_history_rows: 3,
            source_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
