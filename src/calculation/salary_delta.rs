//! Salary delta projection.
//!
//! Compares the two most recent entries of a salary history (ordered
//! most-recent-first) and reports the signed change with a display label.

use rust_decimal::Decimal;

use crate::models::{SalaryDelta, SalaryDirection, SalaryRecord};

/// Label used when the history is empty.
pub const LABEL_NO_DATA: &str = "no data";
/// Label used when only a single salary record exists.
pub const LABEL_INITIAL: &str = "initial salary";
/// Label used when the latest salary is higher than the previous one.
pub const LABEL_INCREMENT: &str = "increment applied";
/// Label used when the latest salary is lower than the previous one.
pub const LABEL_DECREMENT: &str = "decrement applied";
/// Label used when the latest two salaries are equal.
pub const LABEL_NO_CHANGE: &str = "no change since last review";

/// Projects the salary change from a most-recent-first history.
///
/// - Empty history: flat, zero delta, "no data".
/// - One record: the first-ever salary reads as a full increase from zero,
///   not as "no change".
/// - Two or more: signed delta between the two most recent entries; older
///   records are display-only and never folded into the delta.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::project_salary_delta;
/// use hr_engine::models::{SalaryDirection, SalaryRecord, SalaryType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let history = vec![
///     SalaryRecord {
///         id: "sal_002".to_string(),
///         employee_id: "emp_001".to_string(),
///         base_salary: Decimal::new(6000, 0),
///         effective_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///         salary_type: SalaryType::Monthly,
///         currency: "USD".to_string(),
///     },
///     SalaryRecord {
///         id: "sal_001".to_string(),
///         employee_id: "emp_001".to_string(),
///         base_salary: Decimal::new(5000, 0),
///         effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///         salary_type: SalaryType::Monthly,
///         currency: "USD".to_string(),
///     },
/// ];
///
/// let delta = project_salary_delta(&history);
/// assert_eq!(delta.direction, SalaryDirection::Up);
/// assert_eq!(delta.delta, Decimal::new(1000, 0));
/// assert_eq!(delta.label, "increment applied");
/// ```
pub fn project_salary_delta(history: &[SalaryRecord]) -> SalaryDelta {
    let Some(current) = history.first() else {
        return SalaryDelta {
            direction: SalaryDirection::Flat,
            delta: Decimal::ZERO,
            label: LABEL_NO_DATA.to_string(),
        };
    };

    let Some(previous) = history.get(1) else {
        return SalaryDelta {
            direction: SalaryDirection::Up,
            delta: current.base_salary,
            label: LABEL_INITIAL.to_string(),
        };
    };

    let delta = current.base_salary - previous.base_salary;
    let (direction, label) = if delta > Decimal::ZERO {
        (SalaryDirection::Up, LABEL_INCREMENT)
    } else if delta < Decimal::ZERO {
        (SalaryDirection::Down, LABEL_DECREMENT)
    } else {
        (SalaryDirection::Flat, LABEL_NO_CHANGE)
    };

    SalaryDelta {
        direction,
        delta,
        label: label.to_string(),
    }
}
