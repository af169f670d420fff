use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tally_core::{FundId, FundRow, PriceSnapshot};

pub fn holdings() -> Vec<FundRow> {
    vec![
        FundRow::new(3, "Vanguard FTSE Global All Cap Index (accum.)"),
        FundRow::new(22, "Fundsmith Equity (accum.)"),
        FundRow::new(23, "Lindsell Train UK Equity (income)"),
        FundRow::new(24, "Jupiter Asian Income (income)"),
        FundRow::new(25, "Baillie Gifford American (accum.)"),
        FundRow::new(7, "Royal Mail Group (share)"),
    ]
}

fn at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|t| t.and_utc())
        .unwrap_or_default()
}

fn snap(time: &str, pairs: &[(FundId, i64)]) -> PriceSnapshot {
    PriceSnapshot::from_pairs(
        at(time),
        pairs.iter().map(|(id, cents)| (*id, Decimal::new(*cents, 2))),
    )
}

/// Completed price scrapes, ascending by time.
pub fn snapshots() -> Vec<PriceSnapshot> {
    vec![
        snap(
            "2017-04-03 14:23:49",
            &[(3, 9650), (22, 10020), (23, 1629), (24, 123)],
        ),
        snap(
            "2017-04-21 09:00:01",
            &[(3, 9730), (22, 10003), (23, 1635), (25, 6708)],
        ),
        snap(
            "2017-05-01 10:32:43",
            &[(7, 1021), (3, 9740), (22, 10010), (23, 1633), (25, 6722)],
        ),
        snap("2017-05-03 10:31:06", &[(22, 10015), (25, 6698)]),
    ]
}
