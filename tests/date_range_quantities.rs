use chrono::NaiveDate;
use stats_ranges::ranges::{
    end_boundary, parse_date, quantity, quantity_in_days, quantity_in_months, quantity_in_weeks,
    quantity_in_years, start_boundary,
};
use stats_ranges::Granularity;

fn date(input: &str) -> NaiveDate {
    parse_date(input).unwrap()
}

fn days_between(start: &str, end: &str) -> u64 {
    quantity_in_days(start_boundary(date(start)), end_boundary(date(end)))
}

#[test]
fn day_quantities_match_reporting_fixtures() {
    assert_eq!(days_between("2018-01-25", "2018-01-28"), 4);
    assert_eq!(days_between("2018-01-25", "2018-01-25"), 1);
    assert_eq!(days_between("2018-01-01", "2018-01-31"), 31);
}

#[test]
fn week_quantities_widen_partial_weeks() {
    // 2019-01-13 and 2019-01-20 are both Sundays, so the range opens two
    // calendar weeks even though it is only eight days long.
    assert_eq!(quantity_in_weeks(date("2019-01-13"), date("2019-01-20")), 2);
    assert_eq!(quantity_in_weeks(date("2018-12-01"), date("2018-12-31")), 6);
    assert_eq!(quantity_in_weeks(date("2018-10-22"), date("2018-10-22")), 1);
}

#[test]
fn month_quantities_count_touched_months() {
    assert_eq!(quantity_in_months(date("2018-12-13"), date("2019-01-20")), 2);
    assert_eq!(quantity_in_months(date("2018-12-01"), date("2018-12-31")), 1);
    assert_eq!(quantity_in_months(date("2017-10-22"), date("2018-10-22")), 13);
}

#[test]
fn year_quantities_count_touched_years() {
    assert_eq!(quantity_in_years(date("2018-12-13"), date("2019-01-20")), 2);
    assert_eq!(quantity_in_years(date("2018-12-01"), date("2018-12-31")), 1);
    assert_eq!(quantity_in_years(date("2016-10-22"), date("2018-10-22")), 3);
}

#[test]
fn reversed_ranges_yield_zero_buckets() {
    assert_eq!(quantity_in_months(date("2019-01-20"), date("2018-12-13")), 0);
    assert_eq!(quantity_in_years(date("2019-01-20"), date("2016-12-13")), 0);
}

#[test]
fn granularity_dispatch_matches_direct_calls() {
    let start = date("2018-12-01");
    let end = date("2018-12-31");
    assert_eq!(quantity(Granularity::Day, start, end), 31);
    assert_eq!(quantity(Granularity::Week, start, end), 6);
    assert_eq!(quantity(Granularity::Month, start, end), 1);
    assert_eq!(quantity(Granularity::Year, start, end), 1);
}

#[test]
fn leap_year_february_spans_twenty_nine_days() {
    assert_eq!(days_between("2016-02-01", "2016-02-29"), 29);
    assert_eq!(quantity(Granularity::Month, date("2016-02-01"), date("2016-02-29")), 1);
}
