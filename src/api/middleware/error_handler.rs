//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError. Validation
//! errors carry their rule message to the client verbatim; internal errors
//! are sanitized.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - Validation → 400 BAD_REQUEST, message passed through
    /// - Internal → 500 INTERNAL_SERVER_ERROR, message sanitized
    fn into_response(self) -> Response {
        error_to_response_with_request_id(self, None)
    }
}

/// Converts an AppError into an HTTP response, attaching the request ID for
/// correlation when one is available.
///
/// Handlers that have the `RequestId` extension in scope route their errors
/// through here so the client can match the error body to server logs.
pub fn error_to_response_with_request_id(
    error: AppError,
    request_id: Option<String>,
) -> Response {
    let (status, mut error_response) = match &error {
        AppError::Validation { message } => {
            tracing::warn!(message = %message, "Request rejected by validation");
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", message),
            )
        }
        AppError::Internal { source } => {
            tracing::error!(error = %source, "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
            )
        }
    };

    if let Some(id) = request_id {
        error_response = error_response.with_request_id(&id);
    }

    (status, Json(error_response)).into_response()
}

/// Maps an AppError variant to its corresponding HTTP status code.
///
/// This function is useful for testing and validation purposes.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
///
/// This function is useful for testing and validation purposes.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}
