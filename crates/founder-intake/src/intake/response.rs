use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::decoder::ValidationReport;
use super::domain::Submission;

pub const SUCCESS_MESSAGE: &str = "Form submission received";
pub const REJECTION_MESSAGE: &str = "Thank you for your interest. Unfortunately, \
     this program may not be the right fit for your current situation.";

pub fn validation_error(report: &ValidationReport) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "message": "Validation error",
            "errors": report.violations(),
        })),
    )
        .into_response()
}

pub fn rejection() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "message": REJECTION_MESSAGE,
        })),
    )
        .into_response()
}

pub fn accepted(submission: &Submission) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": SUCCESS_MESSAGE,
            "data": submission,
        })),
    )
        .into_response()
}

pub fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "success": false,
            "message": "Method not allowed",
        })),
    )
        .into_response()
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Internal server error",
        })),
    )
        .into_response()
}

pub fn preflight() -> Response {
    StatusCode::OK.into_response()
}
