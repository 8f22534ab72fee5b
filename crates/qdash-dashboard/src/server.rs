//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let job_routes = Router::new()
        .route("/jobs", get(api::jobs::list_jobs))
        .route("/jobs/new", post(api::jobs::create_job))
        .route("/jobs/{id}", get(api::jobs::get_job))
        .route("/jobs/run/{id}", post(api::jobs::run_job))
        .route("/jobs/cancel/{id}", post(api::jobs::cancel_job))
        .route("/jobs/delete/{id}", delete(api::jobs::delete_job));

    Router::new()
        .route("/", get(api::health::home))
        .route("/health", get(api::health::health))
        .route("/backends", get(api::backends::list_backends))
        .merge(job_routes)
        // The dashboard UI is served from another origin.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
