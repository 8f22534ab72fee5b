//! qdash job layer
//!
//! Job submission and status tracking in front of a compute backend.
//!
//! - [`JobStore`] owns every job record, hands out ids, and keeps queue
//!   positions current after each mutation
//! - [`queue`] computes those positions
//! - [`ExecutionCoordinator`] runs a job through an
//!   [`Executor`](qdash_hal::Executor) and records the outcome
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use qdash_hal::ExecutorRegistry;
//! use qdash_sched::{ExecutionCoordinator, JobStore};
//!
//! let store = Arc::new(JobStore::new());
//! let coordinator = ExecutionCoordinator::new(store.clone(), Arc::new(registry));
//!
//! let job = store.create("AerSimulator", 2, 1024).await;
//! let result = coordinator.run(job.id).await?;
//! println!("{:?}", result.counts);
//! ```

pub mod coordinator;
pub mod error;
pub mod job;
pub mod queue;
pub mod store;

pub use coordinator::ExecutionCoordinator;
pub use error::{SchedError, SchedResult};
pub use job::{DEFAULT_BACKEND, DEFAULT_QUBITS, DEFAULT_SHOTS, Job, JobId, JobResult, JobStatus};
pub use store::JobStore;
