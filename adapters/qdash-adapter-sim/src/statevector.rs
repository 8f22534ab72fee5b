//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use crate::circuit::{Circuit, Gate};

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Evolve |0...0⟩ through every gate of `circuit`.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut sv = Self::new(circuit.num_qubits);
        for gate in &circuit.gates {
            sv.apply(*gate);
        }
        sv
    }

    pub fn apply(&mut self, gate: Gate) {
        match gate {
            Gate::H(q) => self.apply_h(q),
            Gate::Cx(c, t) => self.apply_cx(c, t),
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    /// Cumulative measurement distribution over basis states.
    fn cumulative(&self) -> Vec<f64> {
        self.amplitudes
            .iter()
            .scan(0.0, |acc, amp| {
                *acc += amp.norm_sqr();
                Some(*acc)
            })
            .collect()
    }

    /// Measure every qubit `shots` times. Returns one basis index per shot.
    pub fn sample_many<R: Rng>(&self, shots: u32, rng: &mut R) -> Vec<usize> {
        let cumulative = self.cumulative();
        let last = cumulative.len() - 1;
        (0..shots)
            .map(|_| {
                let r: f64 = rng.r#gen();
                // Rounding can leave the final bucket slightly under 1.0.
                cumulative.partition_point(|&c| c <= r).min(last)
            })
            .collect()
    }

    /// Format a basis index with qubit 0 as the rightmost character.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
    }
}
