use chrono::NaiveDate;
use tally_core::{AnalysisGroupColumn, AnalysisPage};

/// One purchase in the fixture ledger.
pub struct Entry {
    pub page: AnalysisPage,
    pub date: NaiveDate,
    pub item: &'static str,
    pub category: &'static str,
    pub shop: &'static str,
    pub cost: i64,
}

impl Entry {
    pub const fn column(&self, column: AnalysisGroupColumn) -> &'static str {
        match column {
            AnalysisGroupColumn::Item => self.item,
            AnalysisGroupColumn::Category => self.category,
            AnalysisGroupColumn::Shop => self.shop,
        }
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

fn entry(
    page: AnalysisPage,
    day: &str,
    item: &'static str,
    category: &'static str,
    shop: &'static str,
    cost: i64,
) -> Entry {
    Entry {
        page,
        date: date(day),
        item,
        category,
        shop,
        cost,
    }
}

pub fn entries() -> Vec<Entry> {
    use AnalysisPage::{Bills, Food, General, Holiday, Social};
    vec![
        entry(Bills, "2017-09-01", "Rent", "Housing", "Landlord", 72500),
        entry(Bills, "2017-09-04", "Electricity", "Utilities", "EDF", 3700),
        entry(Bills, "2017-08-01", "Rent", "Housing", "Landlord", 72500),
        entry(Bills, "2016-04-04", "Water", "Utilities", "Thames", 3),
        entry(Food, "2017-09-03", "Flour", "Bread", "Tesco", 80),
        entry(Food, "2017-09-05", "Milk", "Dairy", "Tesco", 95),
        entry(Food, "2017-09-05", "Eggs", "Dairy", "Waitrose", 130),
        entry(Food, "2017-09-06", "Apples", "Fruit", "Tesco", 210),
        entry(Food, "2017-08-28", "Bananas", "Fruit", "Tesco", 120),
        entry(General, "2017-09-04", "Batteries", "Electronics", "Argos", 599),
        entry(General, "2017-09-10", "Kettle", "Kitchen", "Argos", 2199),
        entry(Holiday, "2017-09-05", "Flight", "Transport", "easyJet", 15600),
        entry(Holiday, "2017-07-14", "Hotel", "Accommodation", "Booking", 32000),
        entry(Social, "2017-09-08", "Pizza", "Restaurant", "Pizza Express", 2450),
        entry(Social, "2017-09-08", "Beer", "Pub", "The Crown", 900),
        entry(Social, "2016-12-20", "Party", "Celebration", "Home", 11),
    ]
}

pub fn income() -> Vec<(NaiveDate, i64)> {
    vec![
        (date("2017-08-25"), 280_000),
        (date("2017-09-01"), 280_000),
        (date("2017-09-15"), 12_500),
    ]
}
