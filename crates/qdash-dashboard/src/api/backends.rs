//! Backend listing endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::state::AppState;

/// GET /backends - Identifiers of every registered executor, sorted.
pub async fn list_backends(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.executors.available_backends())
}
