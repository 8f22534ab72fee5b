//! Simulator executor implementation.

use std::time::Instant;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use qdash_hal::{Counts, ExecutionRequest, ExecutionResult, Executor, HalError, HalResult};

use crate::circuit::Circuit;
use crate::histogram;
use crate::statevector::Statevector;

/// Default backend identifier served by the simulator.
pub const DEFAULT_NAME: &str = "AerSimulator";

/// Default qubit limit (statevector memory grows as 2^n).
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local statevector simulator.
#[derive(Debug, Clone)]
pub struct SimulatorExecutor {
    name: String,
    max_qubits: u32,
    seed: Option<u64>,
}

impl SimulatorExecutor {
    /// Create a simulator serving [`DEFAULT_NAME`].
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            max_qubits: DEFAULT_MAX_QUBITS,
            seed: None,
        }
    }

    /// Serve a different backend identifier.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Fix the sampling seed, for reproducible counts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self, request: &ExecutionRequest) -> HalResult<()> {
        if request.qubits == 0 {
            return Err(HalError::InvalidCircuit(
                "circuit needs at least one qubit".into(),
            ));
        }
        if request.qubits > self.max_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                request.qubits, self.max_qubits
            )));
        }
        if request.shots == 0 {
            return Err(HalError::InvalidShots("shots must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SimulatorExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Run simulation synchronously.
fn run_simulation(qubits: usize, shots: u32, seed: Option<u64>) -> ExecutionResult {
    let start = Instant::now();
    debug!("Starting simulation: {} qubits, {} shots", qubits, shots);

    let circuit = Circuit::bell_prefix(qubits);
    let sv = Statevector::from_circuit(&circuit);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut counts = Counts::new();
    for outcome in sv.sample_many(shots, &mut rng) {
        counts.insert(sv.outcome_to_bitstring(outcome), 1);
    }

    let elapsed = start.elapsed();
    debug!("Simulation completed in {:?}", elapsed);

    let artifact = histogram::render(&counts);
    ExecutionResult::new(counts, shots, artifact)
}

#[async_trait]
impl Executor for SimulatorExecutor {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(backend = %self.name))]
    async fn execute(&self, request: &ExecutionRequest) -> HalResult<ExecutionResult> {
        self.validate(request)?;

        let qubits = request.qubits as usize;
        let shots = request.shots;
        let seed = self.seed;

        tokio::task::spawn_blocking(move || run_simulation(qubits, shots, seed))
            .await
            .map_err(|e| HalError::Backend(format!("simulation task failed: {e}")))
    }
}
