//! Application state for the dashboard server.

use std::sync::Arc;

use qdash_adapter_sim::SimulatorExecutor;
use qdash_hal::ExecutorRegistry;
use qdash_sched::{
    DEFAULT_BACKEND, DEFAULT_QUBITS, DEFAULT_SHOTS, ExecutionCoordinator, Job, JobStore,
};
use tracing::info;

use crate::config::DashboardConfig;

/// Shared application state.
pub struct AppState {
    /// Dashboard configuration.
    pub config: DashboardConfig,
    /// Every job record.
    pub store: Arc<JobStore>,
    /// Runs and cancels jobs in `store`.
    pub coordinator: ExecutionCoordinator,
    /// Executors by backend identifier.
    pub executors: Arc<ExecutorRegistry>,
}

impl AppState {
    /// Create state with the local simulator as the only executor.
    pub fn with_config(config: DashboardConfig) -> Self {
        let mut simulator = SimulatorExecutor::new()
            .with_name(config.simulator.name.clone())
            .with_max_qubits(config.simulator.max_qubits);
        if let Some(seed) = config.simulator.seed {
            simulator = simulator.with_seed(seed);
        }

        let executors = ExecutorRegistry::new().with_executor(Arc::new(simulator));
        Self::with_executors(config, executors)
    }

    /// Create state around a caller-supplied executor registry.
    pub fn with_executors(config: DashboardConfig, executors: ExecutorRegistry) -> Self {
        let store = Arc::new(JobStore::new());
        let executors = Arc::new(executors);

        let mut coordinator = ExecutionCoordinator::new(store.clone(), executors.clone());
        if let Some(timeout) = config.execution_timeout() {
            coordinator = coordinator.with_timeout(timeout);
        }

        Self {
            config,
            store,
            coordinator,
            executors,
        }
    }

    /// Create `count` default jobs, as examples for a fresh dashboard.
    pub async fn seed_jobs(&self, count: usize) -> Vec<Job> {
        let mut jobs = Vec::with_capacity(count);
        for _ in 0..count {
            jobs.push(
                self.store
                    .create(DEFAULT_BACKEND, DEFAULT_QUBITS, DEFAULT_SHOTS)
                    .await,
            );
        }
        if count > 0 {
            info!(count, "Seeded example jobs");
        }
        jobs
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(DashboardConfig::default())
    }
}
