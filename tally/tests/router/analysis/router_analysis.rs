use tally::{AnalysisGroupBy, AnalysisPage, AnalysisPeriod, CostItem};

use crate::helpers::{day, fixture_now, mock_tally};

fn item(category: &str, sum: i64) -> CostItem {
    CostItem {
        category: category.to_string(),
        sum,
    }
}

#[tokio::test]
async fn month_report_covers_every_category_in_order() {
    let tally = mock_tally();
    let report = tally
        .analysis(AnalysisPeriod::Month, None, 0, fixture_now())
        .await
        .unwrap();

    assert_eq!(report.description, "September 2017");
    assert_eq!(report.start, day(2017, 9, 1).and_hms_opt(0, 0, 0).unwrap());
    assert_eq!(
        report.end,
        day(2017, 9, 30).and_hms_milli_opt(23, 59, 59, 999).unwrap()
    );

    let pages: Vec<AnalysisPage> = report.cost.iter().map(|c| c.page).collect();
    assert_eq!(pages, AnalysisPage::ALL.to_vec());

    // bills always break down by item
    assert_eq!(
        report.cost[0].tree,
        vec![item("Electricity", 3_700), item("Rent", 72_500)]
    );
    // ungrouped: one row holding the category total
    assert_eq!(report.cost[1].tree, vec![item("food", 515)]);
    let totals: Vec<i64> = report.cost.iter().map(|c| c.total()).collect();
    assert_eq!(totals, vec![76_200, 515, 2_798, 15_600, 3_350]);

    assert_eq!(report.income, 292_500);
    assert_eq!(report.saved, 292_500 - 98_463);
}

#[tokio::test]
async fn month_timeline_pads_only_up_to_first_category() {
    let tally = mock_tally();
    let report = tally
        .analysis(AnalysisPeriod::Month, None, 0, fixture_now())
        .await
        .unwrap();
    let timeline = report.timeline.expect("month has a timeline");

    assert_eq!(timeline.len(), 30);
    assert_eq!(timeline[0], vec![72_500]);
    assert_eq!(timeline[2], vec![0, 80]);
    // bills first, then general appends without a slot for food
    assert_eq!(timeline[3], vec![3_700, 599]);
    assert_eq!(timeline[4], vec![0, 225, 15_600]);
    assert_eq!(timeline[7], vec![0, 0, 0, 0, 3_350]);
    assert_eq!(timeline[9], vec![0, 0, 2_199]);
    assert!(timeline[1].is_empty());
    assert!(timeline[29].is_empty());
}

#[tokio::test]
async fn grouping_by_shop_splits_category_costs() {
    let tally = mock_tally();
    let report = tally
        .analysis(
            AnalysisPeriod::Month,
            Some(AnalysisGroupBy::Shop),
            0,
            fixture_now(),
        )
        .await
        .unwrap();

    let food = &report.cost[1];
    assert_eq!(food.page, AnalysisPage::Food);
    assert_eq!(food.tree, vec![item("Tesco", 385), item("Waitrose", 130)]);

    // bills are always broken down by item
    let bills = &report.cost[0];
    assert_eq!(
        bills.tree,
        vec![item("Electricity", 3_700), item("Rent", 72_500)]
    );
}

#[tokio::test]
async fn week_report_has_no_timeline_and_floors_savings() {
    let tally = mock_tally();
    let report = tally
        .analysis(AnalysisPeriod::Week, None, 0, fixture_now())
        .await
        .unwrap();

    assert_eq!(report.description, "Week beginning September 4, 2017");
    assert!(report.timeline.is_none());
    assert_eq!(report.income, 0);
    assert_eq!(report.saved, 0);
    let total: i64 = report.cost.iter().map(|c| c.total()).sum();
    // food bought on the Sunday before falls outside the week
    assert_eq!(total, 3_700 + 435 + 2_798 + 15_600 + 3_350);
}

#[tokio::test]
async fn previous_year_timeline_has_leap_day() {
    let tally = mock_tally();
    let report = tally
        .analysis(AnalysisPeriod::Year, None, 1, fixture_now())
        .await
        .unwrap();

    assert_eq!(report.description, "2016");
    let timeline = report.timeline.unwrap();
    assert_eq!(timeline.len(), 366);
    assert_eq!(timeline[94], vec![3]);
    assert_eq!(timeline[354], vec![0, 0, 0, 0, 11]);
}

#[tokio::test]
async fn category_order_drives_slot_padding() {
    let tally = tally::Tally::builder()
        .with_source(std::sync::Arc::new(tally_mock::MockSource::new()))
        .categories(&[AnalysisPage::Social, AnalysisPage::Bills])
        .build()
        .unwrap();
    let report = tally
        .analysis(AnalysisPeriod::Month, None, 0, fixture_now())
        .await
        .unwrap();

    assert_eq!(report.cost.len(), 2);
    assert_eq!(report.cost[0].page, AnalysisPage::Social);
    let timeline = report.timeline.unwrap();
    assert_eq!(timeline[0], vec![0, 72_500]);
    assert_eq!(timeline[7], vec![3_350]);
    assert_eq!(report.saved, 292_500 - 76_200 - 3_350);
}

#[tokio::test]
async fn absurd_page_offset_is_invalid_arg() {
    let tally = mock_tally();
    let err = tally
        .analysis(AnalysisPeriod::Year, None, u32::MAX, fixture_now())
        .await
        .unwrap_err();
    assert!(matches!(err, tally::TallyError::InvalidArg(_)));
}
