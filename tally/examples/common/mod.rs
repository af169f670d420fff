use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tally::LedgerSource;

/// The fixture ledger bundled with `tally-mock`.
#[must_use]
pub fn get_source() -> Arc<dyn LedgerSource> {
    Arc::new(tally_mock::MockSource::new())
}

/// A reference instant inside the fixture ledger's busiest week.
#[must_use]
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 9, 5, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
