//! Attendance aggregation.
//!
//! Tallies per-day attendance records for a window into present/absent/
//! leave-day counts and total logged hours.

use rust_decimal::Decimal;

use crate::models::{AttendanceMetrics, AttendanceRecord, AttendanceStatus};

/// Counts days with status present or partial.
pub fn days_present(records: &[AttendanceRecord]) -> u32 {
    records
        .iter()
        .filter(|record| {
            matches!(
                record.status,
                AttendanceStatus::Present | AttendanceStatus::Partial
            )
        })
        .count() as u32
}

/// Counts days with status absent.
pub fn days_absent(records: &[AttendanceRecord]) -> u32 {
    records
        .iter()
        .filter(|record| record.status == AttendanceStatus::Absent)
        .count() as u32
}

/// Counts days with status sick or holiday.
pub fn leave_days(records: &[AttendanceRecord]) -> u32 {
    records
        .iter()
        .filter(|record| {
            matches!(
                record.status,
                AttendanceStatus::Sick | AttendanceStatus::Holiday
            )
        })
        .count() as u32
}

/// Sums logged hours across all records, treating missing hours as zero.
///
/// Records without hours still contribute to the day counts; they are
/// included here at zero, not excluded.
pub fn total_hours(records: &[AttendanceRecord]) -> Decimal {
    records
        .iter()
        .map(|record| record.total_hours.unwrap_or(Decimal::ZERO))
        .sum()
}

/// Computes all attendance counters for a window in one pass.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::summarize_attendance;
/// use hr_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
///     status: AttendanceStatus::Present,
///     total_hours: Some(Decimal::new(80, 1)), // 8.0
/// }];
///
/// let metrics = summarize_attendance(&records);
/// assert_eq!(metrics.present_days, 1);
/// assert_eq!(metrics.total_hours, Decimal::new(80, 1));
/// ```
pub fn summarize_attendance(records: &[AttendanceRecord]) -> AttendanceMetrics {
    records.iter().fold(
        AttendanceMetrics::default(),
        |mut metrics, record| {
            match record.status {
                AttendanceStatus::Present | AttendanceStatus::Partial => {
                    metrics.present_days += 1;
                }
                AttendanceStatus::Absent => {
                    metrics.absent_days += 1;
                }
                AttendanceStatus::Sick | AttendanceStatus::Holiday => {
                    metrics.leave_days += 1;
                }
            }
            metrics.total_hours += record.total_hours.unwrap_or(Decimal::ZERO);
            metrics
        },
    )
}
