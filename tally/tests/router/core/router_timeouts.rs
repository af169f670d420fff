use std::time::Duration;

use tally::{AnalysisPage, AnalysisPeriod, FundPeriod, Tally, TallyError};
use tally_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::fixture_now;

#[tokio::test(start_paused = true)]
async fn hanging_call_maps_to_source_timeout() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller.set_income_behavior(MockBehavior::Hang).await;

    let tally = Tally::builder()
        .with_source(source)
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = tally
        .analysis(AnalysisPeriod::Month, None, 0, fixture_now())
        .await
        .unwrap_err();
    assert_eq!(err, TallyError::source_timeout("D0", "income"));
}

#[tokio::test(start_paused = true)]
async fn request_deadline_bounds_the_whole_fan_out() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller
        .set_timeline_behavior(AnalysisPage::Food, MockBehavior::Hang)
        .await;

    let tally = Tally::builder()
        .with_source(source)
        .source_timeout(Duration::from_secs(60))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = tally
        .analysis(AnalysisPeriod::Month, None, 0, fixture_now())
        .await
        .unwrap_err();
    assert_eq!(err, TallyError::request_timeout("analysis"));
}

#[tokio::test(start_paused = true)]
async fn fund_history_deadline_uses_its_own_label() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller.set_snapshots_behavior(MockBehavior::Hang).await;

    let tally = Tally::builder()
        .with_source(source)
        .source_timeout(Duration::from_secs(60))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = tally
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap_err();
    assert_eq!(err, TallyError::request_timeout("fund history"));
}
