//! Leave request model and related types.
//!
//! This module defines the [`LeaveRequest`] struct together with the
//! [`LeaveType`] and [`LeaveStatus`] enums used for leave accounting.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The category of a leave request.
///
/// Each category carries its own annual allowance in the engine
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual vacation leave.
    Vacation,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// Emergency leave.
    Emergency,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
}

impl LeaveType {
    /// All leave types in their canonical display order.
    ///
    /// Per-type balance reports iterate in this order so output is stable
    /// regardless of request order.
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Vacation,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Emergency,
        LeaveType::Maternity,
        LeaveType::Paternity,
    ];
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveType::Vacation => write!(f, "vacation"),
            LeaveType::Sick => write!(f, "sick"),
            LeaveType::Personal => write!(f, "personal"),
            LeaveType::Emergency => write!(f, "emergency"),
            LeaveType::Maternity => write!(f, "maternity"),
            LeaveType::Paternity => write!(f, "paternity"),
        }
    }
}

/// The lifecycle state of a leave request.
///
/// A request is created pending by the employee and transitioned once to
/// approved or rejected by a manager; it is never re-opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a manager decision.
    Pending,
    /// Approved by a manager; counts against the allowance.
    Approved,
    /// Rejected by a manager; does not count against the allowance.
    Rejected,
}

/// Represents a single leave request for one employee.
///
/// # Example
///
/// ```
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
///     reason: Some("Family trip".to_string()),
///     status: LeaveStatus::Approved,
///     approved_by: Some("mgr_001".to_string()),
///     approved_at: None,
///     rejection_reason: None,
/// };
/// assert!(request.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee who submitted the request.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive). Never before `start_date`.
    pub end_date: NaiveDate,
    /// Inclusive day count for the request, precomputed at submission time
    /// as `end_date - start_date + 1`.
    pub days_requested: u32,
    /// Optional free-text reason supplied by the employee.
    #[serde(default)]
    pub reason: Option<String>,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// The manager who approved the request, when approved.
    #[serde(default)]
    pub approved_by: Option<String>,
    /// When the request was approved.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    /// Why the request was rejected, when rejected.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl LeaveRequest {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_request(status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: "leave_001".to_string(),
            employee_id: "emp_001".to_string(),
            leave_type: LeaveType::Vacation,
            start_date: make_date("2025-06-02"),
            end_date: make_date("2025-06-06"),
            days_requested: 5,
            reason: None,
            status,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        }
    }

    #[test]
    fn test_is_approved() {
        assert!(create_test_request(LeaveStatus::Approved).is_approved());
        assert!(!create_test_request(LeaveStatus::Pending).is_approved());
        assert!(!create_test_request(LeaveStatus::Rejected).is_approved());
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Vacation).unwrap(),
            "\"vacation\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::Maternity).unwrap(),
            "\"maternity\""
        );
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_deserialize_leave_request() {
        let json = r#"{
            "id": "leave_007",
            "employee_id": "emp_003",
            "leave_type": "sick",
            "start_date": "2025-02-10",
            "end_date": "2025-02-11",
            "days_requested": 2,
            "status": "approved",
            "approved_by": "mgr_001"
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Sick);
        assert_eq!(request.days_requested, 2);
        assert_eq!(request.approved_by.as_deref(), Some("mgr_001"));
        assert!(request.reason.is_none());
        assert!(request.rejection_reason.is_none());
    }

    #[test]
    fn test_leave_request_round_trip() {
        let request = create_test_request(LeaveStatus::Rejected);
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn test_all_leave_types_ordered() {
        assert_eq!(LeaveType::ALL.len(), 6);
        assert_eq!(LeaveType::ALL[0], LeaveType::Vacation);
        assert_eq!(LeaveType::ALL[5], LeaveType::Paternity);
    }

    #[test]
    fn test_leave_type_display() {
        assert_eq!(format!("{}", LeaveType::Vacation), "vacation");
        assert_eq!(format!("{}", LeaveType::Paternity), "paternity");
    }
}
