//! qdash Local Statevector Simulator
//!
//! The default executor behind the `AerSimulator` backend identifier. Every
//! job runs the same small circuit: a Hadamard on qubit 0, a CX onto qubit 1
//! when the job has two or more qubits, and a measurement of every qubit.
//! Counts are sampled from the exact statevector and rendered as a text
//! histogram.
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//!
//! # Example
//!
//! ```ignore
//! use qdash_adapter_sim::SimulatorExecutor;
//! use qdash_hal::{ExecutionRequest, Executor};
//!
//! let sim = SimulatorExecutor::new();
//! let result = sim.execute(&ExecutionRequest::new("AerSimulator", 2, 1024)).await?;
//!
//! // Expect ~50% "00" and ~50% "11"
//! println!("{}", result.artifact.data);
//! ```

mod circuit;
mod histogram;
mod simulator;
mod statevector;

pub use simulator::{DEFAULT_MAX_QUBITS, DEFAULT_NAME, SimulatorExecutor};
