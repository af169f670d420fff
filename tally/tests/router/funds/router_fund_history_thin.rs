use std::sync::Arc;

use tally::{FundPeriod, FundPriceSeries, Tally};
use tally_core::{FundRow, PriceSnapshot};
use tally_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{dt, fixture_now, mock_tally, px, tally_over};

#[tokio::test]
async fn no_recent_snapshots_returns_empty_series() {
    let tally = mock_tally();
    let history = tally
        .fund_history(FundPeriod::Month, 1, fixture_now())
        .await
        .unwrap();

    assert_eq!(history.start_time, dt(2017, 8, 5, 12, 0, 0).timestamp());
    assert!(history.cache_times.is_empty());
    assert_eq!(history.data.len(), 6);
    assert!(history.data.iter().all(FundPriceSeries::is_empty));
}

#[tokio::test]
async fn threshold_is_configurable() {
    let tally = Tally::builder()
        .with_source(Arc::new(tally_mock::MockSource::new()))
        .min_fund_history_rows(5)
        .build()
        .unwrap();
    let history = tally
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap();
    assert!(history.cache_times.is_empty());
    assert_eq!(history.start_time, dt(2016, 9, 5, 12, 0, 0).timestamp());
}

fn snapshots(n: u32) -> Vec<PriceSnapshot> {
    (1..=n)
        .map(|d| PriceSnapshot::from_pairs(dt(2017, 9, d, 0, 0, 0), [(1, px("10"))]))
        .collect()
}

#[tokio::test]
async fn exactly_the_threshold_is_charted() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller
        .set_fund_rows_behavior(MockBehavior::Return(vec![FundRow::new(1, "only")]))
        .await;
    controller
        .set_snapshots_behavior(MockBehavior::Return(snapshots(3)))
        .await;

    let history = tally_over(source)
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap();
    assert_eq!(history.cache_times.len(), 3);
    assert_eq!(history.data[0].prices.len(), 3);
}

#[tokio::test]
async fn below_the_threshold_skips_fetching_snapshots() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller
        .set_fund_rows_behavior(MockBehavior::Return(vec![FundRow::new(1, "only")]))
        .await;
    controller
        .set_snapshots_behavior(MockBehavior::Return(snapshots(2)))
        .await;

    let history = tally_over(source)
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap();
    assert_eq!(history.data, vec![FundPriceSeries::empty(1)]);
    assert_eq!(controller.requested_min_times().await.len(), 1);
}
