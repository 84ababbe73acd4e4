//! Application error types and Axum response conversion.
//!
//! Every error renders the uniform `{"error": {code, message, [detail]}}`
//! envelope; none of them escapes a handler as a panic.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Model still loading, or its load failed. Recoverable by retrying
    /// after the advertised delay.
    NotReady {
        use_429: bool,
        retry_after_seconds: u64,
    },
    /// Required request fields absent, in required order.
    MissingFields(Vec<&'static str>),
    /// Model invocation failed; the detail carries the cause.
    Prediction(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotReady {
                use_429,
                retry_after_seconds,
            } => {
                let status = if use_429 {
                    StatusCode::TOO_MANY_REQUESTS
                } else {
                    StatusCode::SERVICE_UNAVAILABLE
                };
                let body = json!({
                    "error": {
                        "code": status.as_u16(),
                        "message": "Prediction service is waking up (cold start). Please retry shortly.",
                    },
                    "ready": false,
                    "hint": "This often happens right after spin-up while the model artifact loads.",
                    "retry_after_seconds": retry_after_seconds,
                });
                (
                    status,
                    [(header::RETRY_AFTER, retry_after_seconds.to_string())],
                    Json(body),
                )
                    .into_response()
            }
            ApiError::MissingFields(fields) => {
                let body = json!({
                    "error": {
                        "code": 400,
                        "message": format!("Missing fields: {}", fields.join(", ")),
                    }
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Prediction(detail) => {
                let body = json!({
                    "error": {
                        "code": 500,
                        "message": "Could not compute prediction",
                        "detail": detail,
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
