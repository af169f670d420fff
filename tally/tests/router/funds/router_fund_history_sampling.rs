use std::sync::Arc;

use tally::{FundPeriod, Tally};

use crate::helpers::{fixture_now, prices};

fn tally_with_resolution(resolution: usize) -> Tally {
    Tally::builder()
        .with_source(Arc::new(tally_mock::MockSource::new()))
        .fund_history_resolution(resolution)
        .build()
        .unwrap()
}

#[tokio::test]
async fn coarse_resolution_thins_snapshots_before_alignment() {
    // four snapshots at resolution one: step four keeps rows 1, 3 and 4
    let history = tally_with_resolution(1)
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap();

    assert_eq!(history.cache_times, vec![0, 2_405_334, 2_578_037]);

    let by_id = |id: i64| history.data.iter().find(|s| s.fund_id == id).unwrap();
    assert_eq!(by_id(3).prices, prices(&["96.5", "97.4"]));
    assert_eq!(by_id(22).prices, prices(&["100.2", "100.1", "100.15"]));
    assert_eq!(by_id(25).start_index, 1);
    assert_eq!(by_id(25).prices, prices(&["67.22", "66.98"]));
    assert_eq!(by_id(7).start_index, 1);
}

#[tokio::test]
async fn second_to_last_row_is_always_kept() {
    // step two would keep rows 2 and 4; rows 1 and 3 are kept as ends
    let history = tally_with_resolution(2)
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap();
    assert_eq!(history.cache_times.len(), 4);
}
