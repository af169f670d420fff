//! Sparse-to-dense aggregation over ledger rows.
//!
//! Modules include:
//! - `tree`: fold per-category cost rows into a date-keyed tree
//! - `densify`: expand a cost tree into one slot per calendar day
//! - `group`: run-length group deep category rows
//! - `align`: align fund price snapshots into dense per-fund series
/// Fund price snapshot alignment and sampling.
pub mod align;
/// Calendar densification of cost trees.
pub mod densify;
/// Run-length grouping of deep category rows.
pub mod group;
/// Date-keyed cost tree construction.
pub mod tree;
