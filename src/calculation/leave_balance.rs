//! Leave balance reconciliation.
//!
//! Given a snapshot of leave requests for one employee and the configured
//! allowances, these functions compute the approved usage, the remaining
//! aggregate balance, and per-category balances.

use chrono::NaiveDate;

use crate::config::LeaveAllowances;
use crate::models::{LeaveRequest, LeaveStatus, LeaveType, LeaveTypeBalance};

use super::date_math::year_window;

/// Sums the approved leave days attributed to the reference date's year.
///
/// A request counts if its status is approved and its start date falls in
/// the reference year's half-open window. A request spanning two years is
/// attributed entirely to the year containing its start date, not prorated.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::approved_days_in_year;
/// use hr_engine::models::{LeaveRequest, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest {
///     id: "leave_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Vacation,
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
///     days_requested: 5,
///     reason: None,
///     status: LeaveStatus::Approved,
///     approved_by: None,
///     approved_at: None,
///     rejection_reason: None,
/// };
///
/// let reference = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(approved_days_in_year(&[request], reference), 5);
/// ```
pub fn approved_days_in_year(requests: &[LeaveRequest], reference: NaiveDate) -> u32 {
    let (year_start, year_end) = year_window(reference);
    requests
        .iter()
        .filter(|request| request.is_approved())
        .filter(|request| request.start_date >= year_start && request.start_date < year_end)
        .map(|request| request.days_requested)
        .sum()
}

/// Computes the remaining aggregate leave balance.
///
/// When `override_remaining` is present it is returned unchanged; the
/// manual override always wins over the computed value, even when it is
/// stale or inconsistent with the approved-days sum. Otherwise the balance
/// is `allowance - approved`, floored at zero.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::remaining_balance;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(remaining_balance(&[], 25, None, reference), 25);
/// assert_eq!(remaining_balance(&[], 25, Some(7), reference), 7);
/// ```
pub fn remaining_balance(
    requests: &[LeaveRequest],
    allowance: u32,
    override_remaining: Option<u32>,
    reference: NaiveDate,
) -> u32 {
    if let Some(remaining) = override_remaining {
        return remaining;
    }
    allowance.saturating_sub(approved_days_in_year(requests, reference))
}

/// Computes allowance, usage, and remaining days per leave category.
///
/// Results are returned in the canonical [`LeaveType::ALL`] order.
/// Remaining days saturate at zero per category, independent of the
/// aggregate override.
pub fn per_type_balances(
    requests: &[LeaveRequest],
    allowances: &LeaveAllowances,
    reference: NaiveDate,
) -> Vec<LeaveTypeBalance> {
    let (year_start, year_end) = year_window(reference);

    LeaveType::ALL
        .iter()
        .map(|&leave_type| {
            let allowed = allowances.for_type(leave_type);
            let used = requests
                .iter()
                .filter(|request| request.is_approved() && request.leave_type == leave_type)
                .filter(|request| {
                    request.start_date >= year_start && request.start_date < year_end
                })
                .map(|request| request.days_requested)
                .sum();
            LeaveTypeBalance {
                leave_type,
                allowed,
                used,
                remaining: allowed.saturating_sub(used),
            }
        })
        .collect()
}

/// Counts leave requests still awaiting a decision.
pub fn pending_count(requests: &[LeaveRequest]) -> u32 {
    requests
        .iter()
        .filter(|request| request.status == LeaveStatus::Pending)
        .count() as u32
}

/// Counts rejected leave requests.
pub fn rejected_count(requests: &[LeaveRequest]) -> u32 {
    requests
        .iter()
        .filter(|request| request.status == LeaveStatus::Rejected)
        .count() as u32
}
