//! Error types for the HAL crate.

use thiserror::Error;

/// Errors an executor can report back to the coordinator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// No executor serves the requested backend.
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// The requested circuit cannot be built.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds executor capabilities.
    #[error("Circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// The executor did not answer in time.
    #[error("Execution timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Execution failed inside the executor.
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// Generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_display() {
        let err = HalError::BackendUnavailable("ibm_torino".into());
        assert_eq!(err.to_string(), "Backend not available: ibm_torino");

        let err = HalError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "Execution timed out after 3s");
    }
}
