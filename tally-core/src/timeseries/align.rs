use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{FundHistory, FundId, FundPriceSeries, FundRow, PriceGroup, PriceSnapshot};

fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// In-progress series for one fund during the snapshot walk.
struct Accumulator {
    start_index: usize,
    prices: Vec<Decimal>,
    groups: Vec<PriceGroup>,
}

impl Accumulator {
    fn new(index: usize, price: Decimal) -> Self {
        Self {
            start_index: index,
            prices: vec![price],
            groups: vec![PriceGroup {
                start_index: index,
                values: vec![price],
            }],
        }
    }

    fn observe(&mut self, index: usize, price: Decimal) {
        let expected = self.start_index + self.prices.len();
        let gap = index.saturating_sub(expected);
        self.prices.extend(std::iter::repeat_n(Decimal::ZERO, gap));
        self.prices.push(price);
        match self.groups.last_mut() {
            Some(group) if gap == 0 => group.values.push(price),
            _ => self.groups.push(PriceGroup {
                start_index: index,
                values: vec![price],
            }),
        }
    }

    fn to_series(&self, fund_id: FundId) -> FundPriceSeries {
        FundPriceSeries {
            fund_id,
            prices: self.prices.clone(),
            start_index: self.start_index,
            groups: self.groups.clone(),
        }
    }
}

/// Align sparse price snapshots into one dense series per fund row.
///
/// Snapshots must be ascending by time with unique ids per snapshot.
///
/// - `start_time` is the first snapshot's Unix time, or `max_age` when there
///   are no snapshots.
/// - `cache_times` holds each snapshot's offset in seconds from the first.
/// - A fund's first observation fixes its `start_index`. A later observation
///   at snapshot `i` first zero-fills any snapshots it was absent from since
///   its last observation (a holding sold and later re-bought), then appends.
///   Nothing is padded after a fund's last observation.
/// - `data` follows `fund_rows` order; funds never observed get an empty
///   series with `start_index` zero, and observed ids with no fund row are dropped.
/// - Prices are rounded to two decimal places.
#[must_use]
pub fn process_fund_history(
    fund_rows: &[FundRow],
    max_age: DateTime<Utc>,
    snapshots: &[PriceSnapshot],
) -> FundHistory {
    let mut by_fund: HashMap<FundId, Accumulator> = HashMap::new();

    for (index, snapshot) in snapshots.iter().enumerate() {
        for (fund_id, price) in snapshot.observations() {
            let price = round_price(price);
            by_fund
                .entry(fund_id)
                .and_modify(|acc| acc.observe(index, price))
                .or_insert_with(|| Accumulator::new(index, price));
        }
    }

    let first_time = snapshots.first().map(|s| s.time.timestamp());
    let start_time = first_time.unwrap_or_else(|| max_age.timestamp());
    let cache_times = snapshots
        .iter()
        .map(|s| s.time.timestamp() - start_time)
        .collect();

    let data = fund_rows
        .iter()
        .map(|row| {
            by_fund
                .get(&row.id)
                .map_or_else(|| FundPriceSeries::empty(row.id), |acc| acc.to_series(row.id))
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "tally::timeseries",
        snapshots = snapshots.len(),
        funds = fund_rows.len(),
        observed = by_fund.len(),
        "aligned fund history"
    );

    FundHistory {
        start_time,
        cache_times,
        data,
    }
}

/// Fund history for a user whose history is too thin to chart.
///
/// Every fund row gets an empty series, `start_time` is `max_age` and there
/// are no cache times.
#[must_use]
pub fn empty_fund_history(fund_rows: &[FundRow], max_age: DateTime<Utc>) -> FundHistory {
    FundHistory {
        start_time: max_age.timestamp(),
        cache_times: Vec::new(),
        data: fund_rows
            .iter()
            .map(|row| FundPriceSeries::empty(row.id))
            .collect(),
    }
}

/// Thin an ascending snapshot list down to roughly `resolution` entries.
///
/// With `n` snapshots and `step = ceil(n / resolution)`, the 1-based row `r`
/// is kept when `r` is a multiple of `step`, or is the first, second-to-last
/// or last row. A `resolution` of zero keeps everything.
#[must_use]
pub fn sample_snapshots(snapshots: Vec<PriceSnapshot>, resolution: usize) -> Vec<PriceSnapshot> {
    let n = snapshots.len();
    if resolution == 0 || n <= resolution {
        return snapshots;
    }
    let step = n.div_ceil(resolution);
    snapshots
        .into_iter()
        .enumerate()
        .filter(|(i, _)| {
            let row = i + 1;
            row % step == 0 || row == 1 || row + 1 >= n
        })
        .map(|(_, s)| s)
        .collect()
}
