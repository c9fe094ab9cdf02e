//! Calculation logic for the HR Insights Engine.
//!
//! This module contains all the calculation functions for the dashboard
//! summary, including date arithmetic and payday projection, leave balance
//! reconciliation, leave submission validation, attendance aggregation,
//! weekly attendance trend bucketing, salary delta projection, performance
//! score averaging, and the composition that assembles them into a single
//! summary.

mod attendance_summary;
mod dashboard;
mod date_math;
mod leave_balance;
mod leave_validation;
mod performance;
mod salary_delta;
mod weekly_trend;

pub use attendance_summary::{
    days_absent, days_present, leave_days, summarize_attendance, total_hours,
};
pub use dashboard::build_dashboard_summary;
pub use date_math::{
    days_in_month, inclusive_day_count, month_window, next_payday, parse_date, year_window,
};
pub use leave_balance::{
    approved_days_in_year, pending_count, per_type_balances, rejected_count, remaining_balance,
};
pub use leave_validation::validate_leave_submission;
pub use performance::average_score;
pub use salary_delta::{
    LABEL_DECREMENT, LABEL_INCREMENT, LABEL_INITIAL, LABEL_NO_CHANGE, LABEL_NO_DATA,
    project_salary_delta,
};
pub use weekly_trend::{TREND_LOOKBACK_MONTHS, weekly_trend};
