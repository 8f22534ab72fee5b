//! Job types.
//!
//! The job state machine:
//!
//! ```text
//!   create() ──→ Queued ──→ Running ──→ Completed
//!                  │           │
//!                  │           └──→ Error(message)
//!                  │
//!                  └──→ Cancelled
//! ```
//!
//! **Invariants:**
//! - Transitions are monotonic; a job never re-enters `Queued`.
//! - Terminal states (`Completed`, `Error`, `Cancelled`) are permanent.
//! - `result` is present only on `Completed`, `error` only on `Error`.
//! - `queue_position` is present only while the job is `Queued` or `Running`.

use chrono::{DateTime, Utc};
use qdash_hal::{Artifact, Counts, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Default backend for new jobs.
pub const DEFAULT_BACKEND: &str = "AerSimulator";

/// Default circuit width for new jobs.
pub const DEFAULT_QUBITS: u32 = 2;

/// Default shot count for new jobs.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Identifier of a job. Allocated from a counter that never goes backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JobId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Lifecycle status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// Waiting to be run.
    Queued,
    /// The executor is working on it.
    Running,
    /// Finished with a result.
    Completed,
    /// Finished with an executor error.
    Error,
    /// Cancelled before it ran.
    Cancelled,
}

impl JobStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Error | JobStatus::Cancelled
        )
    }

    /// Check if the job counts towards queue positions.
    pub fn is_active(&self) -> bool {
        matches!(self, JobStatus::Queued | JobStatus::Running)
    }

    pub fn name(&self) -> &'static str {
        match self {
            JobStatus::Queued => "Queued",
            JobStatus::Running => "Running",
            JobStatus::Completed => "Completed",
            JobStatus::Error => "Error",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload stored on a completed job and returned by a run request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Bitstring frequencies.
    pub counts: Counts,
    /// Rendered view of the counts.
    pub artifact: Artifact,
}

impl From<ExecutionResult> for JobResult {
    fn from(result: ExecutionResult) -> Self {
        Self {
            counts: result.counts,
            artifact: result.artifact,
        }
    }
}

/// A submitted job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,

    /// Current status.
    pub status: JobStatus,

    /// Backend identifier; opaque to the job layer.
    pub backend: String,

    /// Circuit width passed to the executor.
    pub qubits: u32,

    /// Number of shots.
    pub shots: u32,

    /// Rank among active jobs. Maintained by the store.
    pub queue_position: Option<usize>,

    /// Submission timestamp.
    pub created_at: DateTime<Utc>,

    /// Time the job entered `Running`.
    pub started_at: Option<DateTime<Utc>>,

    /// Time the job entered `Completed`.
    pub completed_at: Option<DateTime<Utc>>,

    /// Wall-clock execution time in seconds, rounded to milliseconds.
    pub duration: Option<f64>,

    /// Execution result, present only when `Completed`.
    pub result: Option<JobResult>,

    /// Executor error message, present only when `Error`.
    pub error: Option<String>,
}

impl Job {
    /// Create a queued job. Only the store hands out ids.
    pub(crate) fn new(id: JobId, backend: String, qubits: u32, shots: u32) -> Self {
        Self {
            id,
            status: JobStatus::Queued,
            backend,
            qubits,
            shots,
            queue_position: None,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            duration: None,
            result: None,
            error: None,
        }
    }

    pub(crate) fn mark_running(&mut self) {
        self.status = JobStatus::Running;
        self.started_at = Some(Utc::now());
    }

    pub(crate) fn mark_completed(&mut self, result: JobResult, duration_secs: f64) {
        self.status = JobStatus::Completed;
        self.duration = Some((duration_secs * 1000.0).round() / 1000.0);
        self.result = Some(result);
        self.completed_at = Some(Utc::now());
    }

    pub(crate) fn mark_failed(&mut self, message: String) {
        self.status = JobStatus::Error;
        self.error = Some(message);
    }

    pub(crate) fn mark_cancelled(&mut self) {
        self.status = JobStatus::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queued() -> Job {
        Job::new(JobId(1), DEFAULT_BACKEND.to_string(), 2, 1024)
    }

    #[test]
    fn test_job_status_terminal() {
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Error.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());

        assert!(JobStatus::Queued.is_active());
        assert!(JobStatus::Running.is_active());
        assert!(!JobStatus::Cancelled.is_active());
    }

    #[test]
    fn test_new_job_is_queued_and_empty() {
        let job = queued();
        assert_eq!(job.status, JobStatus::Queued);
        assert!(job.started_at.is_none());
        assert!(job.completed_at.is_none());
        assert!(job.duration.is_none());
        assert!(job.result.is_none());
        assert!(job.error.is_none());
    }

    #[test]
    fn test_mark_completed_rounds_duration() {
        let mut job = queued();
        job.mark_running();
        let counts: Counts = [("00", 512), ("11", 512)].into_iter().collect();
        job.mark_completed(
            JobResult {
                counts,
                artifact: Artifact::text(""),
            },
            0.123_456,
        );

        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.duration, Some(0.123));
        assert!(job.started_at.is_some());
        assert!(job.completed_at.is_some());
        assert!(job.error.is_none());
    }

    #[test]
    fn test_job_serializes_camel_case() {
        let job = queued();
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "Queued");
        assert_eq!(json["backend"], "AerSimulator");
        assert!(json.get("queuePosition").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["result"].is_null());
    }
}
