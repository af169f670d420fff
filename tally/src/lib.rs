//! Tally turns a user's sparse ledger rows into dense, chart-ready series.
//!
//! Overview
//! - Fetches already-aggregated rows from a `LedgerSource` that implements the
//!   `tally_core` capability traits.
//! - Resolves calendar windows in a configured timezone and pages back through
//!   weeks, months or years.
//! - Runs the pure `tally_core` engine over the fetched rows: cost trees, dense
//!   per-day timelines, deep category groups and aligned fund price series.
//! - Bounds every source call with a timeout and optional request deadline.
//!
//! Key behaviors and trade-offs
//! - Category order is configuration, not data: it fixes each category's slot
//!   index in the per-day cost lists, so clients must agree on it.
//! - Per-day cost lists are padded only up to the first category that touched
//!   the day. A later category that skipped the day leaves no hole.
//! - Fund histories with fewer snapshots than `min_fund_history_rows` come back
//!   as empty series instead of a misleading one-point chart.
//! - Long fund histories are thinned to roughly `fund_history_resolution`
//!   snapshots, always keeping the first and the last two.
//!
//! Examples
//! ```rust
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use tally::{AnalysisPeriod, Tally};
//! use tally_mock::MockSource;
//!
//! # tokio_test_block(async {
//! let tally = Tally::builder()
//!     .with_source(Arc::new(MockSource::new()))
//!     .build()?;
//!
//! let now = Utc.with_ymd_and_hms(2017, 9, 5, 12, 0, 0).unwrap();
//! let report = tally.analysis(AnalysisPeriod::Month, None, 0, now).await?;
//! assert_eq!(report.description, "September 2017");
//! assert_eq!(report.timeline.map(|t| t.len()), Some(30));
//! # Ok::<(), tally::TallyError>(())
//! # }).unwrap();
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! See `tally/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Tally, TallyBuilder};

// Re-export core types for convenience
pub use tally_core::{
    AnalysisGroupBy,
    AnalysisGroupColumn,
    AnalysisPage,
    AnalysisPeriod,
    AnalysisReport,
    CategoryCostTree,
    CostItem,
    DeepGroup,
    DeepItem,
    FundHistory,
    FundPeriod,
    FundPriceSeries,
    LedgerSource,
    PriceGroup,
    TallyConfig,
    TallyError,
    Timeline,
    TimeWindow,
};
