//! qdash Hardware Abstraction Layer
//!
//! This crate defines the narrow interface between the job layer and the
//! compute backends that actually run circuits.
//!
//! # Overview
//!
//! - An [`Executor`] runs an [`ExecutionRequest`] to completion
//! - Results come back as [`ExecutionResult`], holding [`Counts`] and a
//!   rendered [`Artifact`]
//! - The [`ExecutorRegistry`] maps backend identifiers to executors
//!
//! # Implementing an Executor
//!
//! ```ignore
//! use qdash_hal::{Artifact, Counts, ExecutionRequest, ExecutionResult, Executor, HalResult};
//! use async_trait::async_trait;
//!
//! struct AlwaysZero;
//!
//! #[async_trait]
//! impl Executor for AlwaysZero {
//!     fn name(&self) -> &str { "zero" }
//!
//!     async fn execute(&self, request: &ExecutionRequest) -> HalResult<ExecutionResult> {
//!         let zeros = "0".repeat(request.qubits as usize);
//!         let counts: Counts = [(zeros, u64::from(request.shots))].into_iter().collect();
//!         Ok(ExecutionResult::new(counts, request.shots, Artifact::text("")))
//!     }
//! }
//! ```

pub mod error;
pub mod executor;
pub mod registry;
pub mod result;

pub use error::{HalError, HalResult};
pub use executor::{ExecutionRequest, Executor};
pub use registry::ExecutorRegistry;
pub use result::{Artifact, Counts, ExecutionResult};
