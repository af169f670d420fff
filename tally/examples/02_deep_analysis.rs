mod common;
use common::{fixture_now, get_source};
use tally::{AnalysisGroupBy, AnalysisPage, AnalysisPeriod, Tally};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::builder().with_source(get_source()).build()?;

    // Food this month, broken down by the food category of each item.
    let groups = tally
        .analysis_deep(
            AnalysisPage::Food,
            AnalysisPeriod::Month,
            AnalysisGroupBy::Category,
            0,
            fixture_now(),
        )
        .await?;

    for group in &groups {
        println!("{}", group.group_key);
        for item in &group.items {
            println!("  {:<12} {:>6}", item.item, item.cost);
        }
    }

    Ok(())
}
