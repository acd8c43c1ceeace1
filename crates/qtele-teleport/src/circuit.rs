//! The fixed three-qubit teleportation circuit.

use qtele_ir::{Circuit, ClbitId, IrResult, QubitId};

use crate::state::InitialState;

/// Number of qubits (and classical bits) in the teleportation circuit.
pub const NUM_QUBITS: u32 = 3;

/// Build the teleportation circuit for `initial_state`.
///
/// `q0` holds the state to send, `q1`/`q2` share a Bell pair. After the
/// Bell measurement of `q0`/`q1` into `c0`/`c1`, the corrections `CX(q1, q2)`
/// and `CZ(q0, q2)` are applied without classical control. The measured
/// qubits are already collapsed at that point, so each correction fires
/// exactly when its measurement read 1. `q2` is finally measured into `c2`.
pub fn teleportation_circuit(initial_state: &InitialState) -> IrResult<Circuit> {
    let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));
    let mut circuit = Circuit::with_size("teleportation", NUM_QUBITS, NUM_QUBITS);

    match initial_state {
        InitialState::Plus => {
            circuit.h(q0)?;
        }
        InitialState::One => {
            circuit.x(q0)?;
        }
        InitialState::Other(_) => {}
    }

    // Bell pair between q1 and q2
    circuit.h(q1)?.cx(q1, q2)?;

    // Bell measurement on q0 and q1
    circuit
        .cx(q0, q1)?
        .h(q0)?
        .measure(q0, ClbitId(0))?
        .measure(q1, ClbitId(1))?;

    // Corrections on q2
    circuit.cx(q1, q2)?.cz(q0, q2)?.measure(q2, ClbitId(2))?;

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepared_circuit_metrics() {
        for state in [InitialState::Plus, InitialState::One] {
            let circuit = teleportation_circuit(&state).unwrap();
            assert_eq!(circuit.num_qubits(), 3);
            assert_eq!(circuit.num_clbits(), 3);
            assert_eq!(circuit.depth(), 7);
            assert_eq!(circuit.size(), 10);
            circuit.dag().verify_integrity().unwrap();
        }
    }

    #[test]
    fn test_unprepared_circuit_metrics() {
        let circuit = teleportation_circuit(&"0".into()).unwrap();
        assert_eq!(circuit.depth(), 7);
        assert_eq!(circuit.size(), 9);
    }

    #[test]
    fn test_gate_sequence() {
        let circuit = teleportation_circuit(&InitialState::One).unwrap();
        let ops: Vec<_> = circuit.instructions().map(ToString::to_string).collect();

        assert_eq!(ops.len(), 10);
        assert!(ops.contains(&"x q0".to_string()));
        // Every other operation is an ancestor of the final measurement.
        assert_eq!(ops.last().map(String::as_str), Some("measure q2 -> c2"));
        assert!(ops.contains(&"cz q0, q2".to_string()));
        assert_eq!(ops.iter().filter(|op| op.starts_with("measure")).count(), 3);
    }
}
