//! Comprehensive integration tests for the HR Insights Engine.
//!
//! This test suite covers the summary endpoint end to end:
//! - Attendance aggregation over the reference month
//! - Leave balances (aggregate, per-category, and manual override)
//! - Next payday projection
//! - Weekly attendance trend
//! - Salary delta projection
//! - Performance score averaging
//! - Error cases
//! - Calculation properties

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_engine::api::{AppState, create_router};
use hr_engine::calculation::{
    inclusive_day_count, next_payday, remaining_balance, weekly_trend,
};
use hr_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_summary(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summary")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(
    employee_id: &str,
    reference_date: &str,
    attendance: Vec<Value>,
    leave: Vec<Value>,
    salary: Vec<Value>,
) -> Value {
    json!({
        "employee": {
            "id": employee_id,
            "employee_code": format!("EMP-{}", employee_id),
            "annual_leave_remaining": null
        },
        "reference_date": reference_date,
        "attendance_records": attendance,
        "leave_requests": leave,
        "salary_history": salary,
        "evaluations": []
    })
}

fn create_attendance(id: &str, date: &str, status: &str, hours: Option<&str>) -> Value {
    json!({
        "id": id,
        "employee_id": "emp_001",
        "date": date,
        "status": status,
        "total_hours": hours
    })
}

fn create_leave(id: &str, leave_type: &str, start: &str, end: &str, days: u32, status: &str) -> Value {
    json!({
        "id": id,
        "employee_id": "emp_001",
        "leave_type": leave_type,
        "start_date": start,
        "end_date": end,
        "days_requested": days,
        "status": status
    })
}

fn create_salary(id: &str, base: &str, effective: &str) -> Value {
    json!({
        "id": id,
        "employee_id": "emp_001",
        "base_salary": base,
        "effective_date": effective,
        "salary_type": "monthly",
        "currency": "USD"
    })
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

// =============================================================================
// SECTION 1: Attendance Aggregation Tests
// =============================================================================

#[tokio::test]
async fn test_attendance_counts_for_reference_month() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-03-31",
        vec![
            create_attendance("att_001", "2025-03-03", "present", Some("8.0")),
            create_attendance("att_002", "2025-03-04", "partial", Some("3.5")),
            create_attendance("att_003", "2025-03-05", "absent", None),
            create_attendance("att_004", "2025-03-06", "sick", None),
            create_attendance("att_005", "2025-03-07", "holiday", None),
        ],
        vec![],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["attendance"]["present_days"], 2);
    assert_eq!(result["attendance"]["absent_days"], 1);
    assert_eq!(result["attendance"]["leave_days"], 2);
    assert_eq!(result["days_worked_this_month"], 2);
}

#[tokio::test]
async fn test_attendance_missing_hours_count_as_zero() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-03-31",
        vec![
            create_attendance("att_001", "2025-03-03", "present", None),
            create_attendance("att_002", "2025-03-04", "present", Some("4.5")),
        ],
        vec![],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["attendance"]["present_days"], 2);
    assert_eq!(result["attendance"]["total_hours"].as_str().unwrap(), "4.5");
}

#[tokio::test]
async fn test_attendance_outside_month_excluded_from_metrics() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![
            create_attendance("att_001", "2025-05-30", "present", Some("8.0")),
            create_attendance("att_002", "2025-06-02", "present", Some("8.0")),
        ],
        vec![],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_worked_this_month"], 1);
}

#[tokio::test]
async fn test_empty_snapshot_yields_zero_metrics() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-06-15", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_worked_this_month"], 0);
    assert_eq!(result["attendance"]["present_days"], 0);
    assert_eq!(result["attendance"]["absent_days"], 0);
    assert_eq!(result["attendance"]["leave_days"], 0);
    assert_eq!(result["leave_days_taken_this_year"], 0);
    assert_eq!(result["leaves_remaining"], 25);
}

// =============================================================================
// SECTION 2: Leave Balance Tests
// =============================================================================

#[tokio::test]
async fn test_leave_balance_subtracts_approved_days() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![
            create_leave("leave_001", "vacation", "2025-03-03", "2025-03-07", 5, "approved"),
            create_leave("leave_002", "sick", "2025-04-01", "2025-04-02", 2, "approved"),
            create_leave("leave_003", "personal", "2025-05-05", "2025-05-05", 1, "pending"),
            create_leave("leave_004", "vacation", "2025-05-12", "2025-05-13", 2, "rejected"),
        ],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["leave_days_taken_this_year"], 7);
    assert_eq!(result["leaves_remaining"], 18);
    assert_eq!(result["pending_requests"], 1);
    assert_eq!(result["rejected_requests"], 1);
}

#[tokio::test]
async fn test_leave_balance_override_wins() {
    let router = create_router_for_test();
    let mut request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![create_leave(
            "leave_001",
            "vacation",
            "2025-03-01",
            "2025-03-30",
            30,
            "approved",
        )],
        vec![],
    );
    request["employee"]["annual_leave_remaining"] = json!(7);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // Override is reported as-is even though 30 days were approved
    assert_eq!(result["leaves_remaining"], 7);
    assert_eq!(result["leave_days_taken_this_year"], 30);
}

#[tokio::test]
async fn test_leave_balance_floors_at_zero() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![create_leave(
            "leave_001",
            "vacation",
            "2025-01-06",
            "2025-02-14",
            40,
            "approved",
        )],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["leaves_remaining"], 0);
}

#[tokio::test]
async fn test_leave_from_previous_year_is_excluded() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![
            create_leave("leave_001", "vacation", "2024-12-01", "2024-12-05", 5, "approved"),
            create_leave("leave_002", "vacation", "2025-02-10", "2025-02-12", 3, "approved"),
        ],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["leave_days_taken_this_year"], 3);
    assert_eq!(result["leaves_remaining"], 22);
}

#[tokio::test]
async fn test_per_type_balances_reported_for_all_categories() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![
            create_leave("leave_001", "vacation", "2025-03-03", "2025-03-07", 5, "approved"),
            create_leave("leave_002", "emergency", "2025-04-01", "2025-04-05", 5, "approved"),
        ],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let balances = result["leave_balances"].as_array().unwrap();
    assert_eq!(balances.len(), 6);

    let vacation = balances
        .iter()
        .find(|b| b["leave_type"] == "vacation")
        .unwrap();
    assert_eq!(vacation["allowed"], 25);
    assert_eq!(vacation["used"], 5);
    assert_eq!(vacation["remaining"], 20);

    // Emergency allowance is 3 and 5 days were used; remaining floors at zero
    let emergency = balances
        .iter()
        .find(|b| b["leave_type"] == "emergency")
        .unwrap();
    assert_eq!(emergency["allowed"], 3);
    assert_eq!(emergency["used"], 5);
    assert_eq!(emergency["remaining"], 0);
}

// =============================================================================
// SECTION 3: Next Payday Tests
// =============================================================================

#[tokio::test]
async fn test_payday_mid_month_is_day_30() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-06-15", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["next_payday"], "2025-06-30");
}

#[tokio::test]
async fn test_payday_on_payday_rolls_to_next_month() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-06-30", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["next_payday"], "2025-07-30");
}

#[tokio::test]
async fn test_payday_february_caps_at_month_end() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-02-10", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["next_payday"], "2025-02-28");
}

#[tokio::test]
async fn test_payday_december_rolls_into_next_year() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-12-31", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["next_payday"], "2026-01-30");
}

// =============================================================================
// SECTION 4: Weekly Trend Tests
// =============================================================================

#[tokio::test]
async fn test_weekly_trend_buckets_start_on_monday() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![create_attendance("att_001", "2025-04-15", "present", Some("8.0"))],
        vec![],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let trend = result["weekly_trend"].as_array().unwrap();
    assert!(!trend.is_empty());
    for bucket in trend {
        let week_start = make_date(bucket["week_start"].as_str().unwrap());
        assert_eq!(week_start.weekday(), Weekday::Mon);
    }
    // First bucket covers April 1 (window opens two months before June)
    assert_eq!(trend[0]["week_start"], "2025-03-31");
}

#[tokio::test]
async fn test_weekly_trend_counts_absences() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![
            create_attendance("att_001", "2025-06-09", "present", Some("8.0")),
            create_attendance("att_002", "2025-06-10", "sick", None),
            create_attendance("att_003", "2025-06-11", "absent", None),
            create_attendance("att_004", "2025-06-12", "holiday", None),
        ],
        vec![],
        vec![],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let trend = result["weekly_trend"].as_array().unwrap();
    let bucket = trend
        .iter()
        .find(|b| b["week_start"] == "2025-06-09")
        .unwrap();
    assert_eq!(bucket["present_days"], 1);
    assert_eq!(bucket["absence_days"], 3);
}

#[tokio::test]
async fn test_weekly_trend_empty_weeks_are_present_with_zeros() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-06-15", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    let trend = result["weekly_trend"].as_array().unwrap();
    // April through June 2025 spans 14 Monday-starting weeks
    assert_eq!(trend.len(), 14);
    for bucket in trend {
        assert_eq!(bucket["present_days"], 0);
        assert_eq!(bucket["absence_days"], 0);
    }
}

// =============================================================================
// SECTION 5: Salary Delta Tests
// =============================================================================

#[tokio::test]
async fn test_salary_delta_no_history() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-06-15", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["salary"]["direction"], "flat");
    assert_eq!(result["salary"]["delta"].as_str().unwrap(), "0");
    assert_eq!(result["salary"]["label"], "no data");
}

#[tokio::test]
async fn test_salary_delta_single_record_is_initial() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![],
        vec![create_salary("sal_001", "5000", "2025-01-01")],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["salary"]["direction"], "up");
    assert_eq!(result["salary"]["delta"].as_str().unwrap(), "5000");
    assert_eq!(result["salary"]["label"], "initial salary");
}

#[tokio::test]
async fn test_salary_delta_increment() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![],
        vec![
            create_salary("sal_002", "6000", "2025-03-01"),
            create_salary("sal_001", "5000", "2025-01-01"),
        ],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["salary"]["direction"], "up");
    assert_eq!(result["salary"]["delta"].as_str().unwrap(), "1000");
    assert_eq!(result["salary"]["label"], "increment applied");
}

#[tokio::test]
async fn test_salary_delta_decrement_is_signed() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![],
        vec![
            create_salary("sal_002", "4500", "2025-03-01"),
            create_salary("sal_001", "5000", "2025-01-01"),
        ],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["salary"]["direction"], "down");
    assert_eq!(result["salary"]["delta"].as_str().unwrap(), "-500");
    assert_eq!(result["salary"]["label"], "decrement applied");
}

#[tokio::test]
async fn test_salary_delta_no_change() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![],
        vec![
            create_salary("sal_002", "5000", "2025-03-01"),
            create_salary("sal_001", "5000", "2025-01-01"),
        ],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["salary"]["direction"], "flat");
    assert_eq!(result["salary"]["label"], "no change since last review");
}

// =============================================================================
// SECTION 6: Performance Average Tests
// =============================================================================

#[tokio::test]
async fn test_performance_average_omitted_without_scores() {
    let router = create_router_for_test();
    let request = create_request("emp_001", "2025-06-15", vec![], vec![], vec![]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result.get("average_performance_score").is_none());
}

#[tokio::test]
async fn test_performance_average_prefers_overall_rating() {
    let router = create_router_for_test();
    let mut request = create_request("emp_001", "2025-06-15", vec![], vec![], vec![]);
    request["evaluations"] = json!([
        {
            "id": "eval_001",
            "employee_id": "emp_001",
            "overall_rating": "4.0",
            "performance_score": "1.0"
        },
        {
            "id": "eval_002",
            "employee_id": "emp_001",
            "performance_score": "3.0"
        },
        {
            "id": "eval_003",
            "employee_id": "emp_001"
        }
    ]);

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // Average of 4.0 and 3.0; the scoreless evaluation is skipped
    assert_eq!(
        result["average_performance_score"].as_str().unwrap(),
        "3.5"
    );
}

// =============================================================================
// SECTION 7: Error Cases Tests
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summary")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_employee() {
    let router = create_router_for_test();

    let body = json!({
        "reference_date": "2025-06-15",
        "attendance_records": []
    });

    let (status, error) = post_summary(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_missing_reference_date() {
    let router = create_router_for_test();

    let body = json!({
        "employee": {
            "id": "emp_001",
            "employee_code": "EMP-001"
        }
    });

    let (status, error) = post_summary(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_invalid_leave_type() {
    let router = create_router_for_test();

    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![],
        vec![create_leave(
            "leave_001",
            "sabbatical",
            "2025-03-03",
            "2025-03-07",
            5,
            "approved",
        )],
        vec![],
    );

    let (status, error) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        error["code"].as_str().unwrap() == "VALIDATION_ERROR"
            || error["code"].as_str().unwrap() == "MALFORMED_JSON"
    );
}

// =============================================================================
// SECTION 8: Response Field Validation Tests
// =============================================================================

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_001",
        "2025-06-15",
        vec![create_attendance("att_001", "2025-06-02", "present", Some("8.0"))],
        vec![create_leave(
            "leave_001",
            "vacation",
            "2025-03-03",
            "2025-03-07",
            5,
            "approved",
        )],
        vec![create_salary("sal_001", "5000", "2025-01-01")],
    );

    let (status, result) = post_summary(router, request).await;

    assert_eq!(status, StatusCode::OK);

    // Verify top-level fields
    assert!(result["summary_id"].is_string());
    assert!(result["generated_at"].is_string());
    assert!(result["engine_version"].is_string());
    assert!(result["employee_id"].is_string());
    assert!(result["next_payday"].is_string());
    assert!(result["days_worked_this_month"].is_number());
    assert!(result["leave_days_taken_this_year"].is_number());
    assert!(result["leaves_remaining"].is_number());
    assert!(result["pending_requests"].is_number());
    assert!(result["rejected_requests"].is_number());

    // Verify nested structures
    assert!(result["attendance"]["present_days"].is_number());
    assert!(result["attendance"]["total_hours"].is_string());
    assert!(result["leave_balances"].is_array());
    assert!(result["salary"]["direction"].is_string());
    assert!(result["weekly_trend"].is_array());
}

// =============================================================================
// SECTION 9: Calculation Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_inclusive_day_count_matches_span(
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
        span in 0i64..400,
    ) {
        let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let end = start + chrono::Duration::days(span);
        let count = inclusive_day_count(start, end).unwrap();
        prop_assert_eq!(count as i64, span + 1);
    }

    #[test]
    fn prop_remaining_balance_never_exceeds_allowance(
        allowance in 0u32..100,
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let remaining = remaining_balance(&[], allowance, None, reference);
        prop_assert!(remaining <= allowance);
    }

    #[test]
    fn prop_next_payday_is_strictly_future(
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let payday = next_payday(reference);
        prop_assert!(payday > reference);
        prop_assert!(payday.day() <= 30);
    }

    #[test]
    fn prop_weekly_trend_is_contiguous_mondays(
        year in 2020i32..2030,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let buckets = weekly_trend(&[], reference);
        prop_assert!(!buckets.is_empty());
        for bucket in &buckets {
            prop_assert_eq!(bucket.week_start.weekday(), Weekday::Mon);
        }
        for pair in buckets.windows(2) {
            prop_assert_eq!(
                (pair[1].week_start - pair[0].week_start).num_days(),
                7
            );
        }
    }
}
