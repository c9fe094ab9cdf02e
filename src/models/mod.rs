//! Core data models for the HR Insights Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod performance;
mod role;
mod salary;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use performance::PerformanceEvaluation;
pub use role::{DashboardArea, Role};
pub use salary::{SalaryRecord, SalaryType};
pub use summary::{
    AttendanceMetrics, DashboardSummary, LeaveTypeBalance, SalaryDelta, SalaryDirection,
    WeekBucket,
};
