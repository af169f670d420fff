use std::sync::Arc;

use tally::{AnalysisPeriod, Tally};

use crate::helpers::dt;

#[tokio::test]
async fn reference_instant_is_read_in_configured_zone() {
    // 23:30 UTC on August 31 is already September 1 in London summer time
    let now = dt(2017, 8, 31, 23, 30, 0);

    let utc = Tally::builder()
        .with_source(Arc::new(tally_mock::MockSource::new()))
        .build()
        .unwrap();
    let london = Tally::builder()
        .with_source(Arc::new(tally_mock::MockSource::new()))
        .timezone(chrono_tz::Europe::London)
        .build()
        .unwrap();

    let a = utc.analysis(AnalysisPeriod::Month, None, 0, now).await.unwrap();
    let b = london
        .analysis(AnalysisPeriod::Month, None, 0, now)
        .await
        .unwrap();

    assert_eq!(a.description, "August 2017");
    assert_eq!(b.description, "September 2017");
    assert_eq!(a.timeline.map(|t| t.len()), Some(31));
    assert_eq!(b.timeline.map(|t| t.len()), Some(30));
}
