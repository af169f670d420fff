use tally::{AnalysisGroupBy, AnalysisPage, AnalysisPeriod, DeepGroup, DeepItem};

use crate::helpers::{fixture_now, mock_tally};

fn group(key: &str, items: &[(&str, i64)]) -> DeepGroup {
    DeepGroup {
        group_key: key.to_string(),
        items: items
            .iter()
            .map(|(item, cost)| DeepItem {
                item: (*item).to_string(),
                cost: *cost,
            })
            .collect(),
    }
}

#[tokio::test]
async fn food_by_category_groups_items() {
    let tally = mock_tally();
    let groups = tally
        .analysis_deep(
            AnalysisPage::Food,
            AnalysisPeriod::Month,
            AnalysisGroupBy::Category,
            0,
            fixture_now(),
        )
        .await
        .unwrap();

    assert_eq!(
        groups,
        vec![
            group("Bread", &[("Flour", 80)]),
            group("Dairy", &[("Eggs", 130), ("Milk", 95)]),
            group("Fruit", &[("Apples", 210)]),
        ]
    );
}

#[tokio::test]
async fn bills_ignore_requested_grouping() {
    let tally = mock_tally();
    let groups = tally
        .analysis_deep(
            AnalysisPage::Bills,
            AnalysisPeriod::Month,
            AnalysisGroupBy::Shop,
            0,
            fixture_now(),
        )
        .await
        .unwrap();

    let keys: Vec<&str> = groups.iter().map(|g| g.group_key.as_str()).collect();
    assert_eq!(keys, vec!["Electricity", "Rent"]);
}

#[tokio::test]
async fn empty_window_yields_no_groups() {
    let tally = mock_tally();
    let groups = tally
        .analysis_deep(
            AnalysisPage::Holiday,
            AnalysisPeriod::Week,
            AnalysisGroupBy::Category,
            1,
            fixture_now(),
        )
        .await
        .unwrap();
    assert!(groups.is_empty());
}
