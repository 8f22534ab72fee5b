//! Service banner and health check endpoints.

use axum::Json;

use crate::dto::{HealthResponse, MessageResponse};

/// GET / - Service banner.
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Quantum Dashboard Backend is running!"))
}

/// GET /health - Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
