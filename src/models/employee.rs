//! Employee model.

use serde::{Deserialize, Serialize};

/// Represents an employee as seen by the summary calculations.
///
/// Only the fields the engine computes over are carried here; profile
/// details (names, contacts, department) stay in the storage layer.
///
/// # Example
///
/// ```
/// use hr_engine::models::Employee;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employee_code: "EMP-A1B2C3D4E5".to_string(),
///     annual_leave_remaining: Some(7),
/// };
/// assert_eq!(employee.annual_leave_remaining, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Generated employee code (e.g., "EMP-A1B2C3D4E5").
    pub employee_code: String,
    /// Manually set remaining-leave override. When present it takes
    /// precedence over the computed remaining balance, even if stale.
    #[serde(default)]
    pub annual_leave_remaining: Option<u32>,
}
