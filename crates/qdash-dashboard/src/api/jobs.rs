//! Job management endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use qdash_sched::{Job, JobId, JobResult};

use crate::dto::{CreateJobRequest, MessageResponse, OkResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /jobs - List all jobs, ascending by id.
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Json<Vec<Job>> {
    Json(state.store.list().await)
}

/// GET /jobs/{id} - Get one job.
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Job>, ApiError> {
    let job = state.store.get(JobId(id)).await?;
    Ok(Json(job))
}

/// POST /jobs/new - Create a queued job.
///
/// A request without a JSON body creates a job with default parameters.
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CreateJobRequest>>,
) -> (StatusCode, Json<Job>) {
    let params = payload
        .map(|Json(req)| req.resolve())
        .unwrap_or_else(|| CreateJobRequest::default().resolve());

    let job = state
        .store
        .create(params.backend, params.qubits, params.shots)
        .await;

    (StatusCode::CREATED, Json(job))
}

/// POST /jobs/run/{id} - Run a queued job and wait for its result.
pub async fn run_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<JobResult>, ApiError> {
    let result = state.coordinator.run(JobId(id)).await?;
    Ok(Json(result))
}

/// POST /jobs/cancel/{id} - Cancel a queued job.
pub async fn cancel_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.coordinator.cancel(JobId(id)).await?;
    Ok(Json(MessageResponse::new("Job cancelled successfully")))
}

/// DELETE /jobs/delete/{id} - Remove a job in any status.
pub async fn delete_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.delete(JobId(id)).await?;
    Ok(Json(OkResponse { ok: true }))
}
