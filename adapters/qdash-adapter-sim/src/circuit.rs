//! The circuit the simulator runs for every job.

/// Gates understood by the statevector engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Hadamard on one qubit.
    H(usize),
    /// Controlled-X (control, target).
    Cx(usize, usize),
}

/// A gate list over `num_qubits`, measured on every qubit at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    pub num_qubits: usize,
    pub gates: Vec<Gate>,
}

impl Circuit {
    /// H on qubit 0, then CX(0, 1) when there is a second qubit.
    ///
    /// Two qubits give a Bell pair; wider circuits leave the remaining
    /// qubits in |0⟩.
    pub fn bell_prefix(num_qubits: usize) -> Self {
        let mut gates = vec![Gate::H(0)];
        if num_qubits > 1 {
            gates.push(Gate::Cx(0, 1));
        }
        Self { num_qubits, gates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_qubit_has_no_cx() {
        assert_eq!(Circuit::bell_prefix(1).gates, vec![Gate::H(0)]);
    }

    #[test]
    fn test_wide_circuit_entangles_first_pair_only() {
        let circuit = Circuit::bell_prefix(4);
        assert_eq!(circuit.num_qubits, 4);
        assert_eq!(circuit.gates, vec![Gate::H(0), Gate::Cx(0, 1)]);
    }
}
