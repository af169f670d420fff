use tally::{AnalysisPage, AnalysisPeriod, FundPeriod, TallyError};
use tally_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{fixture_now, tally_over};

#[tokio::test]
async fn untagged_errors_are_attributed_to_the_source() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller
        .set_fund_rows_behavior(MockBehavior::Fail(TallyError::Data("bad row".into())))
        .await;

    let tally = tally_over(source);
    let err = tally
        .fund_history(FundPeriod::Year, 1, fixture_now())
        .await
        .unwrap_err();
    assert_eq!(err, TallyError::source("D0", "data issue: bad row"));
}

#[tokio::test]
async fn structured_errors_pass_through() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller
        .set_timeline_behavior(
            AnalysisPage::Social,
            MockBehavior::Fail(TallyError::not_found("user 7")),
        )
        .await;

    let tally = tally_over(source);
    let err = tally
        .analysis(AnalysisPeriod::Year, None, 0, fixture_now())
        .await
        .unwrap_err();
    assert_eq!(err, TallyError::not_found("user 7"));
}
