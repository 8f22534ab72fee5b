//! Error handling for the job layer.

use thiserror::Error;

use crate::job::{JobId, JobStatus};

/// Result type for job operations.
pub type SchedResult<T> = Result<T, SchedError>;

/// Errors that can occur during job operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// Job not found in the store.
    #[error("Job not found: {0}")]
    JobNotFound(JobId),

    /// The job's current status does not allow the requested action.
    #[error("Cannot {action} job {id} in status {status}")]
    InvalidJobState {
        id: JobId,
        status: JobStatus,
        action: &'static str,
    },

    /// The executor failed; the message is the executor's, unchanged.
    #[error("{0}")]
    ExecutorFailure(String),
}

impl SchedError {
    /// Rejection for a run request against a job that is already running.
    pub fn is_already_running(&self) -> bool {
        matches!(
            self,
            SchedError::InvalidJobState {
                status: JobStatus::Running,
                action: "run",
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchedError::JobNotFound(JobId(7));
        assert_eq!(err.to_string(), "Job not found: 7");

        let err = SchedError::InvalidJobState {
            id: JobId(3),
            status: JobStatus::Completed,
            action: "cancel",
        };
        assert_eq!(err.to_string(), "Cannot cancel job 3 in status Completed");

        let err = SchedError::ExecutorFailure("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_is_already_running() {
        let err = SchedError::InvalidJobState {
            id: JobId(1),
            status: JobStatus::Running,
            action: "run",
        };
        assert!(err.is_already_running());

        let err = SchedError::InvalidJobState {
            id: JobId(1),
            status: JobStatus::Running,
            action: "cancel",
        };
        assert!(!err.is_already_running());
    }
}
