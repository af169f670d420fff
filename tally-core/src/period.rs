//! Calendar window resolution for analysis pages and fund look-back bounds.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::{AnalysisPeriod, FundPeriod, TallyError, TimeWindow};

fn out_of_range(what: &str) -> TallyError {
    TallyError::InvalidArg(format!("{what} is outside the supported calendar range"))
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last millisecond before the start of `next`.
fn end_before(next: NaiveDate) -> NaiveDateTime {
    start_of_day(next) - TimeDelta::milliseconds(1)
}

fn week_window(reference: NaiveDate, page: u32) -> Result<TimeWindow, TallyError> {
    let monday =
        reference - TimeDelta::days(i64::from(reference.weekday().num_days_from_monday()));
    let start = monday
        .checked_sub_signed(TimeDelta::weeks(i64::from(page)))
        .ok_or_else(|| out_of_range("week"))?;
    let next = start
        .checked_add_signed(TimeDelta::weeks(1))
        .ok_or_else(|| out_of_range("week"))?;

    Ok(TimeWindow {
        start: start_of_day(start),
        end: end_before(next),
        description: start.format("Week beginning %B %-d, %Y").to_string(),
    })
}

fn month_window(reference: NaiveDate, page: u32) -> Result<TimeWindow, TallyError> {
    let first = reference - TimeDelta::days(i64::from(reference.day0()));
    let start = first
        .checked_sub_months(Months::new(page))
        .ok_or_else(|| out_of_range("month"))?;
    let next = start
        .checked_add_months(Months::new(1))
        .ok_or_else(|| out_of_range("month"))?;

    Ok(TimeWindow {
        start: start_of_day(start),
        end: end_before(next),
        description: start.format("%B %Y").to_string(),
    })
}

fn year_window(reference: NaiveDate, page: u32) -> Result<TimeWindow, TallyError> {
    let year = i32::try_from(page)
        .ok()
        .and_then(|p| reference.year().checked_sub(p))
        .ok_or_else(|| out_of_range("year"))?;
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| out_of_range("year"))?;
    let next = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(|| out_of_range("year"))?;

    Ok(TimeWindow {
        start: start_of_day(start),
        end: end_before(next),
        description: start.format("%Y").to_string(),
    })
}

/// Resolve the reporting window `page` periods before the one containing `reference`.
///
/// - `Week`: Monday 00:00 through Sunday 23:59:59.999, labelled
///   "Week beginning September 4, 2017".
/// - `Month`: first through last instant of the month, labelled "September 2017".
/// - `Year`: January 1 through December 31, labelled "2017".
///
/// `reference` is read as local calendar time; the caller converts from an
/// absolute instant in whatever zone the ledger is kept in.
///
/// # Errors
/// Returns `TallyError::InvalidArg` only when shifting back by `page` leaves
/// chrono's representable calendar range.
pub fn resolve_period(
    reference: NaiveDateTime,
    period: AnalysisPeriod,
    page: u32,
) -> Result<TimeWindow, TallyError> {
    let date = reference.date();
    match period {
        AnalysisPeriod::Week => week_window(date, page),
        AnalysisPeriod::Month => month_window(date, page),
        AnalysisPeriod::Year => year_window(date, page),
    }
}

/// Lower bound on snapshot time for a fund history request.
///
/// Shifts `now` back `length` calendar months or years (clamping to the end of
/// shorter months). A `length` of zero means "no lower bound" and yields the
/// Unix epoch. `Ytd` ignores `length` and returns January 1 00:00 UTC of the
/// year containing `now`.
///
/// # Errors
/// Returns `TallyError::InvalidArg` if the shifted instant is not representable.
pub fn fund_max_age(
    now: DateTime<Utc>,
    period: FundPeriod,
    length: u32,
) -> Result<DateTime<Utc>, TallyError> {
    match period {
        FundPeriod::Ytd => NaiveDate::from_ymd_opt(now.year(), 1, 1)
            .map(|d| start_of_day(d).and_utc())
            .ok_or_else(|| out_of_range("year to date")),
        _ if length == 0 => Ok(DateTime::<Utc>::UNIX_EPOCH),
        FundPeriod::Month => now
            .checked_sub_months(Months::new(length))
            .ok_or_else(|| out_of_range("fund look-back")),
        FundPeriod::Year => now
            .checked_sub_months(Months::new(length.saturating_mul(12)))
            .ok_or_else(|| out_of_range("fund look-back")),
    }
}
