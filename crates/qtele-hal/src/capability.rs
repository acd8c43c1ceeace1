//! Backend capability introspection.
//!
//! [`Capabilities`] describes what a backend can execute: qubit count,
//! gate vocabulary and shot limits. [`Capabilities::check`] turns those
//! limits into a [`ValidationResult`] for a concrete circuit.

use serde::{Deserialize, Serialize};

use qtele_ir::{Circuit, InstructionKind};

use crate::backend::ValidationResult;

/// Hardware (or simulator) capabilities of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM naming).
    pub gate_set: GateSet,
    /// Maximum number of shots per execution.
    pub max_shots: u32,
    /// Whether this is a simulator rather than a device.
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"` or
    /// `"mid_circuit_measurement"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Capabilities of a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 100_000,
            is_simulator: true,
            features: vec!["statevector".into(), "mid_circuit_measurement".into()],
        }
    }

    /// Set the shot limit.
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = max_shots;
        self
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Check a circuit against qubit count and gate support.
    pub fn check(&self, circuit: &Circuit) -> ValidationResult {
        let mut reasons = vec![];

        if circuit.num_qubits() > self.num_qubits as usize {
            reasons.push(format!(
                "circuit uses {} qubits, backend has {}",
                circuit.num_qubits(),
                self.num_qubits
            ));
        }

        for inst in circuit.instructions() {
            if let InstructionKind::Gate(gate) = &inst.kind {
                let reason = format!("unsupported gate '{}'", gate.name());
                if !self.gate_set.contains(gate.name()) && !reasons.contains(&reason) {
                    reasons.push(reason);
                }
            }
        }

        if reasons.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid { reasons }
        }
    }
}

/// Gate vocabulary of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSet {
    pub single_qubit: Vec<String>,
    pub two_qubit: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub three_qubit: Vec<String>,
}

impl GateSet {
    /// Every gate the IR can express.
    pub fn universal() -> Self {
        Self {
            single_qubit: ["id", "x", "y", "z", "h", "s", "sdg", "t", "tdg"]
                .map(String::from)
                .to_vec(),
            two_qubit: ["cx", "cy", "cz", "swap"].map(String::from).to_vec(),
            three_qubit: vec!["ccx".into()],
        }
    }

    /// Clifford-only gate set (no T, no Toffoli).
    pub fn clifford() -> Self {
        Self {
            single_qubit: ["id", "x", "y", "z", "h", "s", "sdg"]
                .map(String::from)
                .to_vec(),
            two_qubit: ["cx", "cy", "cz", "swap"].map(String::from).to_vec(),
            three_qubit: vec![],
        }
    }

    pub fn contains(&self, gate: &str) -> bool {
        self.single_qubit
            .iter()
            .chain(&self.two_qubit)
            .chain(&self.three_qubit)
            .any(|g| g == gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtele_ir::QubitId;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(20);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert_eq!(caps.max_shots, 100_000);
        assert!(caps.has_feature("mid_circuit_measurement"));
    }

    #[test]
    fn test_gate_set_contains() {
        let universal = GateSet::universal();
        assert!(universal.contains("cz"));
        assert!(universal.contains("ccx"));
        assert!(!universal.contains("rx"));

        let clifford = GateSet::clifford();
        assert!(clifford.contains("h"));
        assert!(!clifford.contains("t"));
    }

    #[test]
    fn test_check_reports_reasons() {
        let mut circuit = qtele_ir::Circuit::with_size("wide", 3, 0);
        circuit.t(QubitId(0)).unwrap().t(QubitId(1)).unwrap();

        let caps = Capabilities {
            gate_set: GateSet::clifford(),
            ..Capabilities::simulator(2)
        };

        match caps.check(&circuit) {
            ValidationResult::Invalid { reasons } => {
                assert_eq!(reasons.len(), 2, "{reasons:?}");
                assert!(reasons[0].contains("3 qubits"));
                assert!(reasons[1].contains("'t'"));
            }
            ValidationResult::Valid => panic!("expected Invalid"),
        }
    }
}
