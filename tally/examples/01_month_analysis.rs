mod common;
use common::{fixture_now, get_source};
use tally::{AnalysisGroupBy, AnalysisPeriod, Tally};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Register the fixture ledger and read dates in London time.
    let tally = Tally::builder()
        .with_source(get_source())
        .timezone(chrono_tz::Europe::London)
        .build()?;

    // 2. Summarize the month containing the reference instant, grouped by shop.
    let report = tally
        .analysis(AnalysisPeriod::Month, Some(AnalysisGroupBy::Shop), 0, fixture_now())
        .await?;

    println!("{} ({} to {})", report.description, report.start, report.end);
    for category in &report.cost {
        println!("  {:<8} {:>8}", category.page.as_str(), category.total());
        for item in &category.tree {
            println!("    {:<16} {:>8}", item.category, item.sum);
        }
    }
    println!("income {} saved {}", report.income, report.saved);

    // 3. Show the days that had any spending.
    if let Some(timeline) = &report.timeline {
        for (i, day) in timeline.iter().enumerate().filter(|(_, d)| !d.is_empty()) {
            println!("  day {:>2}: {day:?}", i + 1);
        }
    }

    Ok(())
}
