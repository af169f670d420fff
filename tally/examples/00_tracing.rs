mod common;
use common::{fixture_now, get_source};
use tally::{AnalysisPeriod, FundPeriod, Tally};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tally=trace (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let tally = Tally::builder().with_source(get_source()).build()?;
    let now = fixture_now();

    let _ = tally.analysis(AnalysisPeriod::Week, None, 0, now).await?;
    let _ = tally.fund_history(FundPeriod::Year, 1, now).await?;

    Ok(())
}
