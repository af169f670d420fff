use tally::{AnalysisPage, AnalysisPeriod};
use tally_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{day, fixture_now, tally_over};

#[tokio::test]
async fn every_call_receives_the_resolved_window() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    let tally = tally_over(source);

    let report = tally
        .analysis(AnalysisPeriod::Month, None, 2, fixture_now())
        .await
        .unwrap();
    assert_eq!(report.description, "July 2017");

    let windows = controller.requested_windows().await;
    // two calls per category plus income
    assert_eq!(windows.len(), AnalysisPage::ALL.len() * 2 + 1);
    assert!(
        windows
            .iter()
            .all(|w| w.start == day(2017, 7, 1).and_hms_opt(0, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn dynamic_rows_flow_into_report() {
    let (source, controller) = DynamicMockSource::new_with_controller("D0");
    controller
        .set_timeline_behavior(
            AnalysisPage::Holiday,
            MockBehavior::Return(vec![tally_core::CostRow::new(day(2017, 9, 2), 40)]),
        )
        .await;
    controller
        .set_period_cost_behavior(
            AnalysisPage::Holiday,
            MockBehavior::Return(vec![tally_core::PeriodCostRow {
                column: "Holiday".into(),
                cost: 40,
            }]),
        )
        .await;
    controller.set_income_behavior(MockBehavior::Return(100)).await;

    let tally = tally_over(source);
    let report = tally
        .analysis(AnalysisPeriod::Month, None, 0, fixture_now())
        .await
        .unwrap();

    let timeline = report.timeline.unwrap();
    assert_eq!(timeline[1], vec![0, 0, 0, 40]);
    assert_eq!(report.saved, 60);
}
