//! Execution coordinator.
//!
//! Drives a job through `Queued → Running → Completed | Error`:
//!
//! 1. `start_run` flips the job to `Running` under the store lock.
//! 2. A spawned task invokes the executor for the job's backend with the
//!    lock released, so other requests are served while it works.
//! 3. The same task writes the outcome back, whatever it was. An executor
//!    error, an unknown backend, or a timeout all end in `Error`.
//!
//! The caller only awaits the task. If the caller goes away mid-run the
//! task still finishes, so a job is never left in `Running`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use qdash_hal::{ExecutionRequest, ExecutionResult, ExecutorRegistry, HalError, HalResult};
use tracing::{Instrument, error, info, instrument, warn};

use crate::error::{SchedError, SchedResult};
use crate::job::{Job, JobId, JobResult};
use crate::store::JobStore;

/// Runs and cancels jobs held in a [`JobStore`].
#[derive(Debug, Clone)]
pub struct ExecutionCoordinator {
    store: Arc<JobStore>,
    executors: Arc<ExecutorRegistry>,
    timeout: Option<Duration>,
}

impl ExecutionCoordinator {
    pub fn new(store: Arc<JobStore>, executors: Arc<ExecutorRegistry>) -> Self {
        Self {
            store,
            executors,
            timeout: None,
        }
    }

    /// Bound every executor call. Without this, a call may take as long as
    /// the executor needs.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn store(&self) -> &Arc<JobStore> {
        &self.store
    }

    /// Run a queued job to completion and return its result.
    ///
    /// On executor failure the job is stored as `Error` and the executor's
    /// message comes back as [`SchedError::ExecutorFailure`]. Dropping the
    /// returned future does not abandon the job: execution and write-back
    /// continue in the background.
    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn run(&self, id: JobId) -> SchedResult<JobResult> {
        let job = self.store.start_run(id).await?;
        info!(
            backend = %job.backend,
            qubits = job.qubits,
            shots = job.shots,
            "Starting job execution"
        );

        let request = ExecutionRequest::new(job.backend, job.qubits, job.shots);
        let task = Execution {
            store: Arc::clone(&self.store),
            executors: Arc::clone(&self.executors),
            timeout: self.timeout,
        };
        let handle = tokio::spawn(task.run(id, request).in_current_span());

        match handle.await {
            Ok(outcome) => outcome,
            // The executor panicked; the task never reached the write-back.
            Err(e) => {
                let message = format!("Execution task failed: {e}");
                error!(error = %message, "Job execution aborted");
                let recorded = self
                    .store
                    .finish_run(id, Err(message.clone()), Duration::ZERO)
                    .await;
                match recorded {
                    Ok(_) | Err(SchedError::JobNotFound(_)) => {}
                    Err(e) => return Err(e),
                }
                Err(SchedError::ExecutorFailure(message))
            }
        }
    }

    /// Cancel a queued job.
    #[instrument(skip(self), fields(job_id = %id))]
    pub async fn cancel(&self, id: JobId) -> SchedResult<Job> {
        self.store.cancel(id).await
    }
}

/// Everything the background half of a run needs, owned.
struct Execution {
    store: Arc<JobStore>,
    executors: Arc<ExecutorRegistry>,
    timeout: Option<Duration>,
}

impl Execution {
    /// Invoke the executor, then record the outcome on the job.
    async fn run(self, id: JobId, request: ExecutionRequest) -> SchedResult<JobResult> {
        let start = Instant::now();
        let outcome = self.execute(&request).await;
        let elapsed = start.elapsed();

        if let Ok(result) = &outcome {
            if !result.is_consistent() {
                warn!(
                    shots = result.shots,
                    total = result.counts.total(),
                    "Executor counts do not add up to the requested shots"
                );
            }
        }

        let outcome = outcome.map(JobResult::from).map_err(|e| e.to_string());

        match self.store.finish_run(id, outcome.clone(), elapsed).await {
            Ok(finished) => match &finished.error {
                None => info!(duration = ?finished.duration, "Job completed"),
                Some(message) => error!(error = %message, "Job execution failed"),
            },
            // Deleted while the executor was working; nothing left to update.
            Err(SchedError::JobNotFound(_)) => {
                warn!("Job deleted during execution; outcome not recorded");
            }
            Err(e) => return Err(e),
        }

        outcome.map_err(SchedError::ExecutorFailure)
    }

    async fn execute(&self, request: &ExecutionRequest) -> HalResult<ExecutionResult> {
        let executor = self.executors.get(&request.backend)?;

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, executor.execute(request))
                .await
                .unwrap_or_else(|_| Err(HalError::Timeout(limit))),
            None => executor.execute(request).await,
        }
    }
}
