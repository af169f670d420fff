//! tally-core
//!
//! Core types, traits, and the aggregation engine shared across the tally workspace.
//!
//! - `types`: common data structures (ledger rows, windows, dense series, reports).
//! - `source`: the `LedgerSource` trait and capability provider traits.
//! - `period`: calendar window resolution.
//! - `timeseries`: sparse-to-dense transformations over fetched rows.
//!
//! Every engine function is pure and synchronous: identical inputs produce
//! structurally identical outputs, with no I/O and no shared state. Inputs are
//! trusted to honor the ordering contracts documented on each function
//! (ascending snapshots, contiguous deep groups); nothing is re-validated.
//!
#![warn(missing_docs)]

/// Calendar window resolution.
pub mod period;
/// Ledger source capability traits and the primary `LedgerSource` interface.
pub mod source;
/// Sparse-to-dense aggregation utilities.
pub mod timeseries;
pub mod types;

pub use period::{fund_max_age, resolve_period};
pub use source::LedgerSource;
pub use timeseries::align::{empty_fund_history, process_fund_history, sample_snapshots};
pub use timeseries::densify::{days_in_month, densify_timeline};
pub use timeseries::group::group_deep_rows;
pub use timeseries::tree::{CostTree, NestedCostTree, build_cost_tree};
pub use types::*;
