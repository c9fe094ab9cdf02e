//! Performance evaluation model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the latest performance evaluation scores for an employee.
///
/// Both score fields are optional; the performance summary takes
/// `overall_rating` when present, falls back to `performance_score`, and
/// skips the evaluation entirely when neither is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEvaluation {
    /// Unique identifier for the evaluation.
    pub id: String,
    /// The employee this evaluation belongs to.
    pub employee_id: String,
    /// Overall rating on a 0-5 scale, when recorded.
    #[serde(default)]
    pub overall_rating: Option<Decimal>,
    /// Numeric performance score, when recorded.
    #[serde(default)]
    pub performance_score: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_with_rating_only() {
        let json = r#"{
            "id": "eval_001",
            "employee_id": "emp_001",
            "overall_rating": "4.2"
        }"#;

        let evaluation: PerformanceEvaluation = serde_json::from_str(json).unwrap();
        assert_eq!(
            evaluation.overall_rating,
            Some(Decimal::from_str("4.2").unwrap())
        );
        assert!(evaluation.performance_score.is_none());
    }

    #[test]
    fn test_deserialize_with_no_scores() {
        let json = r#"{
            "id": "eval_002",
            "employee_id": "emp_001"
        }"#;

        let evaluation: PerformanceEvaluation = serde_json::from_str(json).unwrap();
        assert!(evaluation.overall_rating.is_none());
        assert!(evaluation.performance_score.is_none());
    }
}
