//! Route handlers

pub mod health;
pub mod home;
pub mod task;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use taskboard_core::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type RouteError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: impl Into<String>) -> RouteError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

pub fn not_found(id: i64) -> RouteError {
    error_response(StatusCode::NOT_FOUND, format!("Task {} not found", id))
}

/// Map a store failure to its HTTP status
pub fn store_error(err: Error) -> RouteError {
    match err {
        Error::TaskNotFound(id) => not_found(id),
        Error::DuplicateName(_) => error_response(StatusCode::CONFLICT, err.to_string()),
        Error::Database(_) => {
            tracing::error!("task store failure: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
