//! Performance score averaging.

use rust_decimal::Decimal;

use crate::models::PerformanceEvaluation;

/// Averages the latest performance scores across evaluations.
///
/// Each evaluation contributes its overall rating when present, falling
/// back to its performance score; evaluations with neither are skipped.
/// Returns `None` when no evaluation carries a usable score, so callers
/// can render a placeholder instead of a misleading zero.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::average_score;
/// use hr_engine::models::PerformanceEvaluation;
/// use rust_decimal::Decimal;
///
/// let evaluations = vec![
///     PerformanceEvaluation {
///         id: "eval_001".to_string(),
///         employee_id: "emp_001".to_string(),
///         overall_rating: Some(Decimal::new(40, 1)), // 4.0
///         performance_score: None,
///     },
///     PerformanceEvaluation {
///         id: "eval_002".to_string(),
///         employee_id: "emp_002".to_string(),
///         overall_rating: Some(Decimal::new(30, 1)), // 3.0
///         performance_score: None,
///     },
/// ];
///
/// assert_eq!(average_score(&evaluations), Some(Decimal::new(35, 1))); // 3.5
/// ```
pub fn average_score(evaluations: &[PerformanceEvaluation]) -> Option<Decimal> {
    let scores: Vec<Decimal> = evaluations
        .iter()
        .filter_map(|evaluation| evaluation.overall_rating.or(evaluation.performance_score))
        .collect();

    if scores.is_empty() {
        return None;
    }

    let total: Decimal = scores.iter().copied().sum();
    Some(total / Decimal::from(scores.len()))
}
