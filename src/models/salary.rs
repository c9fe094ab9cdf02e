//! Salary record model and related types.
//!
//! This module defines the [`SalaryRecord`] struct used for append-only
//! salary history, ordered most-recent-first by effective date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a base salary figure is quoted per month or per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Salary quoted per calendar month.
    Monthly,
    /// Salary quoted per calendar year.
    Annual,
}

/// Represents one entry in an employee's salary history.
///
/// History is append-only; the "current" salary is the entry with the most
/// recent effective date.
///
/// # Example
///
/// ```
/// use hr_engine::models::{SalaryRecord, SalaryType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     id: "sal_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     base_salary: Decimal::new(6000, 0),
///     effective_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     salary_type: SalaryType::Monthly,
///     currency: "USD".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The base salary amount. Non-negative.
    pub base_salary: Decimal,
    /// The date this salary took effect.
    pub effective_date: NaiveDate,
    /// Whether the amount is monthly or annual.
    pub salary_type: SalaryType,
    /// ISO currency code for the amount.
    pub currency: String,
}
