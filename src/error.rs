//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::state::EmployeeId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant implements automatic conversion to an HTTP response via
/// `IntoResponse`. The store itself never produces these for normal absence;
/// the service layer converts its `Option`/`bool` signals into them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Employee with the given ID was not found
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// Creating or updating would give two employees the same email
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// A supplied field violates a format, length, or sign constraint
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::EmployeeNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::DuplicateEmail(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
