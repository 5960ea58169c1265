//! Date-range bucket computation for statistics queries.
//!
//! The remote stats endpoints return one data point per bucket, so before a
//! fetch the data layer has to know how many day/week/month/year buckets a
//! requested range spans. Week, month, and year counts widen both endpoints
//! to whole calendar units first: a range that touches two calendar weeks
//! counts as two weeks even when it is only a few days long.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::common::error::{Result, StatsRangesError};
use crate::domain::Granularity;

/// Default date pattern used across the stats data layer.
pub const DATE_FORMAT_DEFAULT: &str = "%Y-%m-%d";

const DAY_MILLIS: u64 = 24 * 60 * 60 * 1000;

/// Parse a date in strict `yyyy-MM-dd` form: four-digit year, two-digit
/// month and day, `-` separators, ASCII digits throughout.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shape_ok {
        return Err(StatsRangesError::InvalidDateFormat(input.to_string()));
    }

    let date = match (input[0..4].parse(), input[5..7].parse(), input[8..10].parse()) {
        (Ok(year), Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    };
    date.ok_or_else(|| StatsRangesError::InvalidDateFormat(input.to_string()))
}

/// Render a date with a chrono `strftime` pattern.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// The first instant of the day, `00:00:00.000`.
pub fn start_boundary(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last instant of the day at millisecond resolution, `23:59:59.999`.
pub fn end_boundary(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Whole days spanned by two boundary timestamps, rounding partial days up.
///
/// Order-insensitive: the absolute millisecond difference is used, so the
/// same magnitude comes back with the arguments reversed.
pub fn quantity_in_days(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let diff = (end - start).num_milliseconds().unsigned_abs();
    diff.div_ceil(DAY_MILLIS)
}

/// Whole calendar weeks touched by the range.
///
/// The start date is snapped back to the Sunday opening its week and the end
/// date forward to the Saturday closing its week before counting. The week
/// convention is fixed, not configurable. Expects `start <= end`.
pub fn quantity_in_weeks(start: NaiveDate, end: NaiveDate) -> u64 {
    let start = start - Duration::days(start.weekday().num_days_from_sunday() as i64);
    let end = end + Duration::days((6 - end.weekday().num_days_from_sunday()) as i64);
    quantity_in_days(start_boundary(start), end_boundary(end)).div_ceil(7)
}

/// Whole calendar months touched by the range.
///
/// Endpoints are widened to the first and last day of their months (actual
/// month lengths, so February widens to the 29th in leap years), then the
/// count is the inclusive month-index delta. Expects `start <= end`; a
/// reversed range yields 0.
pub fn quantity_in_months(start: NaiveDate, end: NaiveDate) -> u64 {
    let start = first_day_of_month(start);
    let end = last_day_of_month(end);
    if end_boundary(end) <= start_boundary(start) {
        return 0;
    }
    (month_index(end) - month_index(start) + 1) as u64
}

/// Whole calendar years touched by the range.
///
/// Same shape as [`quantity_in_months`] with January 1 / December 31
/// widening and a year delta. Expects `start <= end`; a reversed range
/// yields 0.
pub fn quantity_in_years(start: NaiveDate, end: NaiveDate) -> u64 {
    let start = first_day_of_year(start);
    let end = last_day_of_year(end);
    if end_boundary(end) <= start_boundary(start) {
        return 0;
    }
    (end.year() - start.year() + 1) as u64
}

/// Bucket count for a range at the given reporting granularity.
pub fn quantity(granularity: Granularity, start: NaiveDate, end: NaiveDate) -> u64 {
    match granularity {
        Granularity::Day => quantity_in_days(start_boundary(start), end_boundary(end)),
        Granularity::Week => quantity_in_weeks(start, end),
        Granularity::Month => quantity_in_months(start, end),
        Granularity::Year => quantity_in_years(start, end),
    }
}

fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month.unwrap().pred_opt().unwrap()
}

fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap()
}

fn last_day_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap()
}
