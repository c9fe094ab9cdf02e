//! Dashboard summary composition.
//!
//! Composes the independent calculators into the single summary record the
//! API returns. Each input snapshot is assumed internally consistent (one
//! logical read); nothing here re-validates across rows.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::config::LeaveAllowanceConfig;
use crate::models::{
    AttendanceRecord, DashboardSummary, Employee, LeaveRequest, PerformanceEvaluation,
    SalaryRecord,
};

use super::attendance_summary::summarize_attendance;
use super::date_math::{month_window, next_payday};
use super::leave_balance::{
    approved_days_in_year, pending_count, per_type_balances, rejected_count, remaining_balance,
};
use super::performance::average_score;
use super::salary_delta::project_salary_delta;
use super::weekly_trend::weekly_trend;

/// Builds the complete dashboard summary for one employee.
///
/// Attendance metrics cover the reference month only; the weekly trend uses
/// its own look-back window over the same snapshot; leave figures use the
/// reference year. Salary history must be ordered most-recent-first, as
/// fetched.
pub fn build_dashboard_summary(
    employee: &Employee,
    reference: NaiveDate,
    attendance_records: &[AttendanceRecord],
    leave_requests: &[LeaveRequest],
    salary_history: &[SalaryRecord],
    evaluations: &[PerformanceEvaluation],
    config: &LeaveAllowanceConfig,
) -> DashboardSummary {
    let (month_start, month_end) = month_window(reference);
    let month_records: Vec<AttendanceRecord> = attendance_records
        .iter()
        .filter(|record| record.date >= month_start && record.date < month_end)
        .cloned()
        .collect();

    let attendance = summarize_attendance(&month_records);
    let leave_days_taken_this_year = approved_days_in_year(leave_requests, reference);
    let leaves_remaining = remaining_balance(
        leave_requests,
        config.annual_allowance,
        employee.annual_leave_remaining,
        reference,
    );

    DashboardSummary {
        summary_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        days_worked_this_month: attendance.present_days,
        leave_days_taken_this_year,
        leaves_remaining,
        pending_requests: pending_count(leave_requests),
        rejected_requests: rejected_count(leave_requests),
        next_payday: next_payday(reference),
        attendance,
        leave_balances: per_type_balances(leave_requests, &config.per_type, reference),
        salary: project_salary_delta(salary_history),
        average_performance_score: average_score(evaluations),
        weekly_trend: weekly_trend(attendance_records, reference),
    }
}
