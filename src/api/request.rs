//! Request types for the HR Insights Engine API.
//!
//! This module defines the JSON request structures for the `/summary` endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, LeaveStatus, LeaveType,
    PerformanceEvaluation, SalaryRecord, SalaryType,
};

/// Request body for the `/summary` endpoint.
///
/// Carries one employee's data snapshot and the reference date the summary
/// is computed against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The date the summary windows are anchored to.
    pub reference_date: NaiveDate,
    /// Attendance records covering the trend look-back window.
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecordRequest>,
    /// The employee's leave requests.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequestEntry>,
    /// Salary history ordered most-recent-first.
    #[serde(default)]
    pub salary_history: Vec<SalaryRecordRequest>,
    /// Performance evaluations.
    #[serde(default)]
    pub evaluations: Vec<EvaluationRequest>,
}

/// Employee information in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The human-facing employee code (e.g., "EMP-2024-0001").
    pub employee_code: String,
    /// Manual override for the remaining annual leave balance.
    #[serde(default)]
    pub annual_leave_remaining: Option<u32>,
}

/// One attendance record in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Hours logged for the day, when tracked.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
}

/// One leave request in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestEntry {
    /// Unique identifier for the leave request.
    pub id: String,
    /// The employee the request belongs to.
    pub employee_id: String,
    /// The leave category requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Number of leave days requested.
    pub days_requested: u32,
    /// Free-text reason given by the employee.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current decision status.
    pub status: LeaveStatus,
    /// Identifier of the approving manager, once decided.
    #[serde(default)]
    pub approved_by: Option<String>,
    /// When the request was approved.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    /// Reason given for a rejection.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// One salary record in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The base salary amount.
    pub base_salary: Decimal,
    /// The date this salary took effect.
    pub effective_date: NaiveDate,
    /// Whether the amount is monthly or annual.
    pub salary_type: SalaryType,
    /// ISO currency code for the amount.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// One performance evaluation in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Unique identifier for the evaluation.
    pub id: String,
    /// The employee the evaluation belongs to.
    pub employee_id: String,
    /// The overall rating, when set.
    #[serde(default)]
    pub overall_rating: Option<Decimal>,
    /// The raw performance score, when set.
    #[serde(default)]
    pub performance_score: Option<Decimal>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            employee_code: req.employee_code,
            annual_leave_remaining: req.annual_leave_remaining,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            id: req.id,
            employee_id: req.employee_id,
            date: req.date,
            status: req.status,
            total_hours: req.total_hours,
        }
    }
}

impl From<LeaveRequestEntry> for LeaveRequest {
    fn from(req: LeaveRequestEntry) -> Self {
        LeaveRequest {
            id: req.id,
            employee_id: req.employee_id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            days_requested: req.days_requested,
            reason: req.reason,
            status: req.status,
            approved_by: req.approved_by,
            approved_at: req.approved_at,
            rejection_reason: req.rejection_reason,
        }
    }
}

impl From<SalaryRecordRequest> for SalaryRecord {
    fn from(req: SalaryRecordRequest) -> Self {
        SalaryRecord {
            id: req.id,
            employee_id: req.employee_id,
            base_salary: req.base_salary,
            effective_date: req.effective_date,
            salary_type: req.salary_type,
            currency: req.currency,
        }
    }
}

impl From<EvaluationRequest> for PerformanceEvaluation {
    fn from(req: EvaluationRequest) -> Self {
        PerformanceEvaluation {
            id: req.id,
            employee_id: req.employee_id,
            overall_rating: req.overall_rating,
            performance_score: req.performance_score,
        }
    }
}
