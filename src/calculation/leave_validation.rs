//! Leave submission validation.
//!
//! Validates the date pair of a new leave request and checks it against
//! the employee's remaining balance before the caller persists it.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

use super::date_math::inclusive_day_count;

/// Validates a leave submission and returns the inclusive day count to
/// store as `days_requested`.
///
/// An end date before the start date yields
/// [`EngineError::InvalidDateRange`]. When the employee carries a
/// remaining-balance value, a request for more days than remain yields
/// [`EngineError::InsufficientBalance`]; with no balance on record the
/// request passes unchecked, matching the storage-side fallback.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::validate_leave_submission;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
///
/// assert_eq!(validate_leave_submission(start, end, Some(10)).unwrap(), 5);
/// assert!(validate_leave_submission(start, end, Some(3)).is_err());
/// ```
pub fn validate_leave_submission(
    start: NaiveDate,
    end: NaiveDate,
    remaining: Option<u32>,
) -> EngineResult<u32> {
    let requested = inclusive_day_count(start, end)?;

    if let Some(remaining) = remaining {
        if requested > remaining {
            return Err(EngineError::InsufficientBalance {
                requested,
                remaining,
            });
        }
    }

    Ok(requested)
}
