//! HTTP request handlers for the HR Insights Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_dashboard_summary;
use crate::models::{
    AttendanceRecord, Employee, LeaveRequest, PerformanceEvaluation, SalaryRecord,
};

use super::request::SummaryRequest;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .with_state(state)
}

/// Handler for POST /summary endpoint.
///
/// Accepts an employee data snapshot and returns the computed dashboard
/// summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee: Employee = request.employee.into();
    let reference = request.reference_date;
    let attendance: Vec<AttendanceRecord> = request
        .attendance_records
        .into_iter()
        .map(Into::into)
        .collect();
    let leave_requests: Vec<LeaveRequest> =
        request.leave_requests.into_iter().map(Into::into).collect();
    let salary_history: Vec<SalaryRecord> =
        request.salary_history.into_iter().map(Into::into).collect();
    let evaluations: Vec<PerformanceEvaluation> =
        request.evaluations.into_iter().map(Into::into).collect();

    // Build the summary
    let start_time = Instant::now();
    let summary = build_dashboard_summary(
        &employee,
        reference,
        &attendance,
        &leave_requests,
        &salary_history,
        &evaluations,
        state.config().config(),
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        attendance_count = attendance.len(),
        leave_count = leave_requests.len(),
        leaves_remaining = summary.leaves_remaining,
        duration_us = duration.as_micros(),
        "Summary computed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}
