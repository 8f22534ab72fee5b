//! In-memory job store.
//!
//! The store owns every [`Job`] record and the id counter behind a single
//! `RwLock`. All mutations take the write lock, apply the change, recompute
//! queue positions, and only then release the lock, so no reader ever sees a
//! half-applied transition or a stale position. Readers get clones.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{SchedError, SchedResult};
use crate::job::{Job, JobId, JobResult, JobStatus};
use crate::queue::recompute_positions;

#[derive(Debug, Default)]
struct JobTable {
    jobs: BTreeMap<JobId, Job>,
    /// Last id handed out. Never decremented, also not on delete.
    last_id: u64,
}

impl JobTable {
    fn job_mut(&mut self, id: JobId) -> SchedResult<&mut Job> {
        self.jobs.get_mut(&id).ok_or(SchedError::JobNotFound(id))
    }

    fn recompute(&mut self) {
        recompute_positions(self.jobs.values_mut());
    }
}

/// Thread-safe, in-memory store of job records.
#[derive(Debug, Default)]
pub struct JobStore {
    table: RwLock<JobTable>,
}

impl JobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queued job and return a snapshot of it.
    pub async fn create(&self, backend: impl Into<String>, qubits: u32, shots: u32) -> Job {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = JobId(table.last_id);

        let job = Job::new(id, backend.into(), qubits, shots);
        table.jobs.insert(id, job);
        table.recompute();

        let job = table.jobs[&id].clone();
        info!(
            job_id = %id,
            backend = %job.backend,
            qubits,
            shots,
            position = ?job.queue_position,
            "Job created"
        );
        job
    }

    /// Look up a job.
    pub async fn get(&self, id: JobId) -> SchedResult<Job> {
        let table = self.table.read().await;
        table
            .jobs
            .get(&id)
            .cloned()
            .ok_or(SchedError::JobNotFound(id))
    }

    /// All jobs, ascending by id.
    pub async fn list(&self) -> Vec<Job> {
        let table = self.table.read().await;
        table.jobs.values().cloned().collect()
    }

    /// Remove a job regardless of its status.
    pub async fn delete(&self, id: JobId) -> SchedResult<Job> {
        let mut table = self.table.write().await;
        let job = table.jobs.remove(&id).ok_or(SchedError::JobNotFound(id))?;
        table.recompute();

        info!(job_id = %id, status = %job.status, "Job deleted");
        Ok(job)
    }

    /// Move a queued job to `Running`.
    ///
    /// Fails with [`SchedError::InvalidJobState`] if the job is already
    /// running or has finished.
    pub async fn start_run(&self, id: JobId) -> SchedResult<Job> {
        let mut table = self.table.write().await;
        let job = table.job_mut(id)?;

        if job.status != JobStatus::Queued {
            warn!(job_id = %id, status = %job.status, "Run rejected");
            return Err(SchedError::InvalidJobState {
                id,
                status: job.status,
                action: "run",
            });
        }

        job.mark_running();
        table.recompute();

        debug!(job_id = %id, "Job running");
        Ok(table.jobs[&id].clone())
    }

    /// Cancel a queued job.
    ///
    /// Running jobs cannot be interrupted and are rejected, as are jobs
    /// that already reached a terminal state.
    pub async fn cancel(&self, id: JobId) -> SchedResult<Job> {
        let mut table = self.table.write().await;
        let job = table.job_mut(id)?;

        if job.status != JobStatus::Queued {
            warn!(job_id = %id, status = %job.status, "Cancel rejected");
            return Err(SchedError::InvalidJobState {
                id,
                status: job.status,
                action: "cancel",
            });
        }

        job.mark_cancelled();
        table.recompute();

        info!(job_id = %id, "Job cancelled");
        Ok(table.jobs[&id].clone())
    }

    /// Record the outcome of an execution on a running job.
    ///
    /// Exactly one of result or error is written, and the job moves to
    /// `Completed` or `Error` accordingly.
    pub async fn finish_run(
        &self,
        id: JobId,
        outcome: Result<JobResult, String>,
        elapsed: Duration,
    ) -> SchedResult<Job> {
        let mut table = self.table.write().await;
        let job = table.job_mut(id)?;

        if job.status != JobStatus::Running {
            return Err(SchedError::InvalidJobState {
                id,
                status: job.status,
                action: "finish",
            });
        }

        match outcome {
            Ok(result) => job.mark_completed(result, elapsed.as_secs_f64()),
            Err(message) => job.mark_failed(message),
        }
        table.recompute();

        Ok(table.jobs[&id].clone())
    }
}
