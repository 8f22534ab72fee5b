//! Executor trait and execution requests.
//!
//! An [`Executor`] is the only thing the job layer knows about a compute
//! backend. It receives the three job parameters and answers with either a
//! result or an error message:
//!
//! ```text
//!   ExecutionRequest { backend, qubits, shots }
//!        │
//!        ▼
//!   execute() ──→ Ok(ExecutionResult { counts, artifact, .. })
//!             └─→ Err(HalError)
//! ```
//!
//! Circuit construction, simulation and rendering all live behind this call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HalResult;
use crate::result::ExecutionResult;

/// Parameters for a single execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Backend identifier the job was submitted for.
    pub backend: String,
    /// Circuit width.
    pub qubits: u32,
    /// Number of repetitions.
    pub shots: u32,
}

impl ExecutionRequest {
    pub fn new(backend: impl Into<String>, qubits: u32, shots: u32) -> Self {
        Self {
            backend: backend.into(),
            qubits,
            shots,
        }
    }
}

/// A compute backend that runs jobs to completion.
///
/// # Contract
///
/// - `execute()` returns only once the work is finished; there is no
///   separate submit/poll cycle.
/// - On success the counts total MUST equal `request.shots`.
/// - Errors carry a human-readable message; the caller stores it verbatim.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Backend identifier this executor serves.
    fn name(&self) -> &str;

    /// Run the request and return its result.
    async fn execute(&self, request: &ExecutionRequest) -> HalResult<ExecutionResult>;
}
