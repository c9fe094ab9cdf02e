//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] struct and the
//! [`AttendanceStatus`] enum used for daily attendance tracking.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded status of a single attendance day.
///
/// # Example
///
/// ```
/// use hr_engine::models::AttendanceStatus;
///
/// assert_eq!(format!("{}", AttendanceStatus::Partial), "Partial Day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present for a full day.
    Present,
    /// The employee was absent without leave.
    Absent,
    /// The employee was present for part of the day.
    Partial,
    /// A company or public holiday.
    Holiday,
    /// The employee was out sick.
    Sick,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::Partial => write!(f, "Partial Day"),
            AttendanceStatus::Holiday => write!(f, "Holiday"),
            AttendanceStatus::Sick => write!(f, "Sick Leave"),
        }
    }
}

/// Represents one attendance record for one employee on one date.
///
/// There is at most one record per (employee, date) pair; the storage layer
/// upserts on that key when a manager marks attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
    /// Hours logged for the day, when recorded. Missing hours are treated
    /// as zero during aggregation, never as an error.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
}
