use chrono::NaiveDate;
use tally_core::CostRow;

fn row(y: i32, m: u32, d: u32, cost: i64) -> CostRow {
    CostRow::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), cost)
}

/// Three categories of daily costs spanning 2015 to 2017.
pub fn three_categories() -> Vec<Vec<CostRow>> {
    vec![
        vec![
            row(2015, 1, 10, 5),
            row(2016, 12, 6, 10),
            row(2016, 12, 20, 11),
            row(2017, 1, 4, 15),
            row(2017, 9, 3, 3),
        ],
        vec![row(2015, 1, 10, 1), row(2015, 3, 4, 50), row(2017, 5, 30, 17)],
        vec![row(2016, 4, 4, 3)],
    ]
}
