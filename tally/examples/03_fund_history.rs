mod common;
use common::{fixture_now, get_source};
use tally::{FundPeriod, Tally};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::builder()
        .with_source(get_source())
        .fund_history_resolution(50)
        .build()?;

    // 1. One year of prices up to the reference instant.
    let history = tally.fund_history(FundPeriod::Year, 1, fixture_now()).await?;

    println!(
        "{} snapshots from unix time {}",
        history.cache_times.len(),
        history.start_time
    );

    // 2. Each holding starts at its own snapshot index.
    for series in &history.data {
        println!(
            "fund {:>3}: from #{} {:?} ({} runs)",
            series.fund_id,
            series.start_index,
            series.prices,
            series.groups.len()
        );
    }

    Ok(())
}
