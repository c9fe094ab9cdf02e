//! Summary result types produced by the engine.
//!
//! This module contains the aggregate [`DashboardSummary`] returned by the
//! API, along with the per-concern summary records the calculation modules
//! produce.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::leave::LeaveType;

/// Monthly attendance counters for one employee.
///
/// # Example
///
/// ```
/// use hr_engine::models::AttendanceMetrics;
/// use rust_decimal::Decimal;
///
/// let metrics = AttendanceMetrics {
///     present_days: 18,
///     absent_days: 1,
///     leave_days: 2,
///     total_hours: Decimal::new(1425, 1), // 142.5
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceMetrics {
    /// Days with status present or partial.
    pub present_days: u32,
    /// Days with status absent.
    pub absent_days: u32,
    /// Days with status sick or holiday.
    pub leave_days: u32,
    /// Sum of logged hours; missing hours count as zero.
    pub total_hours: Decimal,
}

/// Allowance, usage, and remaining days for one leave category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeBalance {
    /// The leave category.
    pub leave_type: LeaveType,
    /// The configured annual allowance for the category.
    pub allowed: u32,
    /// Approved days used this year.
    pub used: u32,
    /// `max(allowed - used, 0)`.
    pub remaining: u32,
}

/// One Monday-starting week in the attendance trend.
///
/// Weeks with no attendance records report zero counts rather than being
/// omitted, so the sequence is always contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The Monday this week starts on.
    pub week_start: NaiveDate,
    /// Days with status present or partial.
    pub present_days: u32,
    /// Days with status absent, sick, or holiday.
    pub absence_days: u32,
}

/// The direction of the most recent salary change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryDirection {
    /// The latest salary is higher than the previous one.
    Up,
    /// The latest salary is lower than the previous one.
    Down,
    /// No change, or no salary data at all.
    Flat,
}

/// The change between the two most recent salary entries.
///
/// Only the two most recent records are compared; older history is exposed
/// for display but never folded into the delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDelta {
    /// The direction of the change.
    pub direction: SalaryDirection,
    /// The signed difference between the latest and previous base salary.
    /// The full latest salary when only one record exists.
    pub delta: Decimal,
    /// Display label for the change.
    pub label: String,
}

/// The complete dashboard summary for one employee.
///
/// Composed from the pure calculations over the row snapshots supplied by
/// the caller; everything here is derived, nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Unique identifier for this summary computation.
    pub summary_id: Uuid,
    /// When the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the summary.
    pub engine_version: String,
    /// The employee the summary is for.
    pub employee_id: String,
    /// Days with status present or partial in the reference month.
    pub days_worked_this_month: u32,
    /// Approved leave days attributed to the reference year.
    pub leave_days_taken_this_year: u32,
    /// Remaining aggregate leave balance (override or computed).
    pub leaves_remaining: u32,
    /// Count of pending leave requests in the snapshot.
    pub pending_requests: u32,
    /// Count of rejected leave requests in the snapshot.
    pub rejected_requests: u32,
    /// The next payday strictly after the reference date.
    pub next_payday: NaiveDate,
    /// Attendance counters for the reference month.
    pub attendance: AttendanceMetrics,
    /// Per-category leave balances.
    pub leave_balances: Vec<LeaveTypeBalance>,
    /// Salary change between the two most recent records.
    pub salary: SalaryDelta,
    /// Average performance score across valid evaluations, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_performance_score: Option<Decimal>,
    /// Monday-starting weekly attendance trend over the look-back window.
    pub weekly_trend: Vec<WeekBucket>,
}
