//! Date and interval arithmetic.
//!
//! This module provides the inclusive day-span count used for leave
//! requests, the half-open month and year windows used for bucketing, and
//! the next-payday projection.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Parses an ISO `YYYY-MM-DD` date string.
///
/// A malformed value yields [`EngineError::InvalidDate`] rather than a
/// panic, so callers can surface it as a validation message.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2025-06-02").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
/// );
/// assert!(parse_date("not-a-date").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Returns the number of calendar days spanned by `start..=end`, counting
/// both endpoints.
///
/// A same-day span counts as 1. An `end` before `start` yields
/// [`EngineError::InvalidDateRange`]; the count is never silently clamped.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::inclusive_day_count;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(inclusive_day_count(start, end).unwrap(), 5);
/// assert_eq!(inclusive_day_count(start, start).unwrap(), 1);
/// ```
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }
    Ok((end - start).num_days() as u32 + 1)
}

/// Returns the half-open interval `[start_of_month, start_of_next_month)`
/// for the reference date's calendar month.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::month_window;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
/// let (start, end) = month_window(reference);
/// assert_eq!(start, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// ```
pub fn month_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = reference.with_day(1).expect("day 1 exists in every month");
    (start, start_of_next_month(start))
}

/// Returns the half-open interval `[start_of_year, start_of_next_year)`
/// for the reference date's calendar year.
pub fn year_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start =
        NaiveDate::from_ymd_opt(reference.year(), 1, 1).expect("January 1 exists in every year");
    let end = NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1)
        .expect("January 1 exists in every year");
    (start, end)
}

/// Returns the number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).expect("day 1 exists in every month");
    (start_of_next_month(first) - first).num_days() as u32
}

/// Projects the next payday strictly after the reference date.
///
/// Pay lands on day `min(30, days_in_month)` of each month. If that day in
/// the reference month is on or before the reference date, the payday rolls
/// to the next month at `min(30, days_in_next_month)`. The comparison is
/// date-only, so a payday is never "today".
///
/// # Example
///
/// ```
/// use hr_engine::calculation::next_payday;
/// use chrono::NaiveDate;
///
/// // Mid-month reference pays this month
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(
///     next_payday(reference),
///     NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
/// );
///
/// // Jan 31 rolls to February's last day (non-leap)
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// assert_eq!(
///     next_payday(reference),
///     NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
/// );
/// ```
pub fn next_payday(reference: NaiveDate) -> NaiveDate {
    let target_day = 30.min(days_in_month(reference));
    let candidate = reference
        .with_day(target_day)
        .expect("target day is within the month");

    if candidate <= reference {
        let next_month = start_of_next_month(reference);
        let next_target = 30.min(days_in_month(next_month));
        next_month
            .with_day(next_target)
            .expect("target day is within the month")
    } else {
        candidate
    }
}

fn start_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month")
}
