//! HTTP Error Types
//!
//! Maps application errors to status codes with a `{"message": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};
use waitlist_core::domain::DomainError;
use waitlist_core::error::AppError;

use crate::types::MessageResponse;

/// Client-facing messages
pub mod message {
    pub const DATABASE_ERROR: &str = "Database error";
    pub const INTERNAL_ERROR: &str = "Internal server error";
    pub const NOT_IN_QUEUE: &str = "User is not in the queue.";
    pub const NOT_IN_QUEUE_OR_LEFT: &str = "User not found in the queue or already left";
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(MessageResponse {
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Convert AppError to an HTTP error for `operation`
///
/// Store and internal failures are logged and answered with a generic
/// message. A missing waiting entry is a client condition, logged at debug.
pub fn to_api_error(operation: &'static str, err: AppError) -> ApiError {
    to_api_error_with(operation, message::NOT_IN_QUEUE, err)
}

/// Same as [`to_api_error`] with an operation-specific 404 message
pub fn to_api_error_with(
    operation: &'static str,
    not_in_queue: &'static str,
    err: AppError,
) -> ApiError {
    match err {
        AppError::Domain(DomainError::NotInQueue { user_id, venue_id }) => {
            debug!(operation, %user_id, %venue_id, "No waiting entry");
            ApiError::not_found(not_in_queue)
        }
        AppError::Validation(msg) => ApiError::bad_request(msg),
        AppError::Database(msg) => {
            error!(operation, error = %msg, "Store error");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message::DATABASE_ERROR)
        }
        other => {
            error!(operation, error = %other, "Request failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR)
        }
    }
}
