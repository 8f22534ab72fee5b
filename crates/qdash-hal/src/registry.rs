//! Executor registry.
//!
//! The [`ExecutorRegistry`] maps backend identifiers to executor instances.
//! It is the source for the list of supported backends.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{HalError, HalResult};
use crate::executor::Executor;

/// Registry of executors keyed by backend name.
#[derive(Default, Clone)]
pub struct ExecutorRegistry {
    executors: FxHashMap<String, Arc<dyn Executor>>,
}

impl ExecutorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an executor under its own name, replacing any previous one.
    pub fn register(&mut self, executor: Arc<dyn Executor>) {
        let name = executor.name().to_string();
        debug!("Registering executor: {}", name);
        self.executors.insert(name, executor);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.register(executor);
        self
    }

    /// Look up the executor for `backend`.
    pub fn get(&self, backend: &str) -> HalResult<Arc<dyn Executor>> {
        self.executors.get(backend).cloned().ok_or_else(|| {
            HalError::BackendUnavailable(format!("No executor registered for '{backend}'"))
        })
    }

    /// List all backend names, sorted.
    pub fn available_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.executors.keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorRegistry")
            .field("backends", &self.available_backends())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ExecutionRequest;
    use crate::result::{Artifact, Counts, ExecutionResult};
    use async_trait::async_trait;

    struct Named(&'static str);

    #[async_trait]
    impl Executor for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn execute(&self, request: &ExecutionRequest) -> HalResult<ExecutionResult> {
            let counts: Counts = [("0", u64::from(request.shots))].into_iter().collect();
            Ok(ExecutionResult::new(counts, request.shots, Artifact::text("")))
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ExecutorRegistry::new();
        assert!(registry.available_backends().is_empty());
        assert!(matches!(
            registry.get("AerSimulator"),
            Err(HalError::BackendUnavailable(_))
        ));
    }

    #[test]
    fn test_available_backends_sorted() {
        let registry = ExecutorRegistry::new()
            .with_executor(Arc::new(Named("zebra")))
            .with_executor(Arc::new(Named("alpha")));

        assert_eq!(registry.available_backends(), vec!["alpha", "zebra"]);
    }

    #[tokio::test]
    async fn test_get_returns_registered_executor() {
        let registry = ExecutorRegistry::new().with_executor(Arc::new(Named("stub")));
        let executor = registry.get("stub").unwrap();

        let result = executor
            .execute(&ExecutionRequest::new("stub", 1, 10))
            .await
            .unwrap();
        assert_eq!(result.counts.total(), 10);
    }
}
