//! Error types for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qdash_sched::SchedError;
use serde::{Deserialize, Serialize};

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The executor failed; the message is passed through verbatim.
    #[error("{0}")]
    ExecutorFailure(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExecutorFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<SchedError> for ApiError {
    fn from(e: SchedError) -> Self {
        if e.is_already_running() {
            return ApiError::BadRequest("Job already running".to_string());
        }
        match e {
            SchedError::JobNotFound(_) => ApiError::NotFound("Job not found".to_string()),
            SchedError::InvalidJobState { status, action, .. } => {
                ApiError::BadRequest(format!("Cannot {action} job in status {status}"))
            }
            SchedError::ExecutorFailure(message) => ApiError::ExecutorFailure(message),
        }
    }
}
