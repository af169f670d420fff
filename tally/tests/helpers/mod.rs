// Re-export helpers so tests can `use crate::helpers::*;`
pub mod stub_source;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tally::{LedgerSource, Tally};

pub use stub_source::BareSource;

/// Construct a UTC `DateTime` from components for readability in tests.
pub fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("invalid date")
        .and_hms_opt(hh, mm, ss)
        .expect("invalid time components")
        .and_utc()
}

/// Convenience to derive a UNIX timestamp (seconds) from date components.
#[allow(dead_code)]
pub fn ts(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> i64 {
    dt(y, m, d, hh, mm, ss).timestamp()
}

/// Calendar date shorthand.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid date")
}

/// Reference instant inside the fixture ledger's busiest week.
pub fn fixture_now() -> DateTime<Utc> {
    dt(2017, 9, 5, 12, 0, 0)
}

/// Parse a decimal price without unwrap noise in tests.
pub fn px(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

/// Parse a list of decimal prices.
pub fn prices(values: &[&str]) -> Vec<Decimal> {
    values.iter().map(|v| px(v)).collect()
}

/// A `Tally` over the static fixture ledger with default configuration.
pub fn mock_tally() -> Tally {
    Tally::builder()
        .with_source(Arc::new(tally_mock::MockSource::new()))
        .build()
        .expect("default config is valid")
}

/// A `Tally` over an arbitrary source with default configuration.
pub fn tally_over(source: Arc<dyn LedgerSource>) -> Tally {
    Tally::builder()
        .with_source(source)
        .build()
        .expect("default config is valid")
}
