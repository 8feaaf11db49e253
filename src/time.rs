//! Pure time arithmetic helpers used by the metric reducers.
//!
//! All helpers operate on timezone-naive instants and read calendar fields
//! (hour, weekday, month) directly off the supplied value. The engine does
//! no timezone conversion: bucket boundaries fall wherever the caller's
//! instants say they fall. Scheduling records store wall-clock times with
//! no zone normalization, so the buckets match what schedulers see.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::models::DateRange;

/// Calendar granularities understood by [`bucket_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Calendar month, keyed "YYYY-MM".
    Month,
    /// ISO weekday index 0-6, Monday = 0.
    Weekday,
    /// Hour of day 0-23.
    Hour,
}

/// Returns the number of hours between two instants as a decimal.
///
/// Never negative: when `end` is at or before `start` the result is zero.
/// Resolution is one minute, matching the scheduling records.
///
/// # Examples
///
/// ```
/// use shift_analytics::time::duration_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-01 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(duration_hours(start, end), Decimal::new(85, 1)); // 8.5 hours
/// assert_eq!(duration_hours(end, start), Decimal::ZERO);
/// ```
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return Decimal::ZERO;
    }
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Returns the labor cost of an interval at an optional hourly rate.
///
/// An absent rate costs zero, and a negative rate is clamped to zero before
/// multiplying, so the result is never negative.
pub fn cost(start: NaiveDateTime, end: NaiveDateTime, hourly_rate: Option<Decimal>) -> Decimal {
    match hourly_rate {
        Some(rate) => duration_hours(start, end) * rate.max(Decimal::ZERO),
        None => Decimal::ZERO,
    }
}

/// Returns true if `instant` falls within `range`.
///
/// Inclusive-from, exclusive-to; either bound may be absent.
pub fn is_within(instant: NaiveDateTime, range: &DateRange) -> bool {
    range.contains(instant)
}

/// Returns a stable, sortable grouping key for an instant at the given
/// granularity.
///
/// Keys are zero-padded so lexicographic order matches chronological order
/// within a granularity: "2024-03" for months, "0".."6" for weekdays
/// (Monday = 0), "00".."23" for hours.
///
/// # Examples
///
/// ```
/// use shift_analytics::time::{bucket_key, Granularity};
/// use chrono::NaiveDateTime;
///
/// // 2024-03-04 is a Monday
/// let t = NaiveDateTime::parse_from_str("2024-03-04 09:05:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(bucket_key(t, Granularity::Month), "2024-03");
/// assert_eq!(bucket_key(t, Granularity::Weekday), "0");
/// assert_eq!(bucket_key(t, Granularity::Hour), "09");
/// ```
pub fn bucket_key(instant: NaiveDateTime, granularity: Granularity) -> String {
    match granularity {
        Granularity::Month => month_key(instant),
        Granularity::Weekday => weekday_index(instant).to_string(),
        Granularity::Hour => format!("{:02}", hour_of_day(instant)),
    }
}

/// Returns the "YYYY-MM" month key for an instant.
pub fn month_key(instant: NaiveDateTime) -> String {
    format!("{:04}-{:02}", instant.year(), instant.month())
}

/// Returns the weekday index of an instant, Monday = 0 through Sunday = 6.
pub fn weekday_index(instant: NaiveDateTime) -> usize {
    instant.weekday().num_days_from_monday() as usize
}

/// Returns the hour of day (0-23) of an instant.
pub fn hour_of_day(instant: NaiveDateTime) -> u32 {
    instant.hour()
}

/// Returns midnight on the first day of the instant's month.
pub fn month_start(instant: NaiveDateTime) -> NaiveDateTime {
    first_of_month(instant.year(), instant.month())
        .and_hms_opt(0, 0, 0)
        .unwrap_or(instant)
}

/// Returns the month start shifted by `delta` whole months.
///
/// The result is always midnight on the first of the target month, so
/// day-of-month clamping never arises.
pub fn add_months(instant: NaiveDateTime, delta: i32) -> NaiveDateTime {
    let months0 = instant.year() * 12 + instant.month0() as i32 + delta;
    let year = months0.div_euclid(12);
    let month = months0.rem_euclid(12) as u32 + 1;
    first_of_month(year, month)
        .and_hms_opt(0, 0, 0)
        .unwrap_or(instant)
}

/// Returns the number of days in the instant's calendar month.
pub fn days_in_month(instant: NaiveDateTime) -> i64 {
    let start = month_start(instant);
    let next = add_months(instant, 1);
    (next - start).num_days()
}

/// Returns the number of whole days from `earlier` to `later`, clamped at
/// zero.
pub fn days_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    (later - earlier).num_days().max(0)
}

/// Returns the number of whole calendar months from `earlier` to `later`,
/// clamped at zero.
///
/// A month only counts once the day of month has been reached, so the span
/// from Jan 15 to Feb 14 is zero months and Jan 15 to Feb 15 is one.
pub fn months_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    if later <= earlier {
        return 0;
    }
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12
        + (later.month() as i64 - earlier.month() as i64);
    if later.day() < earlier.day() {
        months -= 1;
    }
    months.max(0)
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Only unrepresentable for years outside chrono's +/-262000 range.
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(NaiveDate::MIN)
}
