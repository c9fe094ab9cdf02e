//! Weekly attendance trend bucketing.
//!
//! Partitions attendance records into Monday-starting week buckets over a
//! fixed look-back window (two months before the reference month through
//! the end of the reference month) for trend visualization.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{AttendanceRecord, AttendanceStatus, WeekBucket};

use super::date_math::month_window;

/// How many whole months before the reference month the trend window opens.
pub const TREND_LOOKBACK_MONTHS: u32 = 2;

/// Buckets attendance records into Monday-starting weeks.
///
/// The window runs from the first day of the month
/// [`TREND_LOOKBACK_MONTHS`] before the reference month through the end of
/// the reference month. The result is the full contiguous sequence of weeks
/// covering that window: weeks without records report zero counts rather
/// than being dropped, and records outside the window are ignored.
///
/// Present days count statuses present and partial; absence days count
/// absent, sick, and holiday.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::weekly_trend;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let buckets = weekly_trend(&[], reference);
///
/// // Window is April through June 2025; every bucket starts on a Monday.
/// assert!(buckets.iter().all(|b| b.week_start.weekday() == Weekday::Mon));
/// assert_eq!(buckets.first().unwrap().week_start, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
/// ```
pub fn weekly_trend(records: &[AttendanceRecord], reference: NaiveDate) -> Vec<WeekBucket> {
    let (_, window_end) = month_window(reference);
    let window_start = subtract_months(
        month_window(reference).0,
        TREND_LOOKBACK_MONTHS,
    );

    // Align the first bucket to the Monday on or before the window start
    let first_monday = window_start
        - Days::new(u64::from(window_start.weekday().num_days_from_monday()));

    let mut buckets: Vec<WeekBucket> = Vec::new();
    let mut week_start = first_monday;
    while week_start < window_end {
        buckets.push(WeekBucket {
            week_start,
            present_days: 0,
            absence_days: 0,
        });
        week_start = week_start + Days::new(7);
    }

    for record in records {
        if record.date < window_start || record.date >= window_end {
            continue;
        }
        let index = ((record.date - first_monday).num_days() / 7) as usize;
        let bucket = &mut buckets[index];
        match record.status {
            AttendanceStatus::Present | AttendanceStatus::Partial => {
                bucket.present_days += 1;
            }
            AttendanceStatus::Absent | AttendanceStatus::Sick | AttendanceStatus::Holiday => {
                bucket.absence_days += 1;
            }
        }
    }

    buckets
}

fn subtract_months(start_of_month: NaiveDate, months: u32) -> NaiveDate {
    let total = start_of_month.year() * 12 + start_of_month.month0() as i32 - months as i32;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("day 1 exists in every month")
}
