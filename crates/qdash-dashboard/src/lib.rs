//! qdash Dashboard - HTTP backend for submitting and tracking quantum jobs.
//!
//! Jobs are created queued, run synchronously against an executor (the
//! local statevector simulator by default), and can be cancelled while
//! queued or deleted at any time. Every response is JSON.
//!
//! | Method | Path | |
//! |--------|------|-|
//! | GET | `/jobs` | all jobs, by id |
//! | GET | `/jobs/{id}` | one job |
//! | POST | `/jobs/new` | create a job |
//! | POST | `/jobs/run/{id}` | run a queued job, returns counts and artifact |
//! | POST | `/jobs/cancel/{id}` | cancel a queued job |
//! | DELETE | `/jobs/delete/{id}` | delete a job |
//! | GET | `/backends` | available backend identifiers |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qdash_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::{ConfigError, DashboardConfig, LogFormat, LoggingConfig, SimulatorConfig};
pub use dto::{CreateJobRequest, HealthResponse, JobParams, MessageResponse, OkResponse};
pub use error::{ApiError, ErrorResponse};
pub use server::create_router;
pub use state::AppState;
