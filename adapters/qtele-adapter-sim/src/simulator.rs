//! Simulator backend implementation.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use qtele_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Counts, ExecutionResult, HalError,
    HalResult,
};
use qtele_ir::{Circuit, Instruction, InstructionKind};

use crate::statevector::Statevector;

/// Default qubit limit of the simulator.
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local simulator backend.
///
/// Every shot starts from |0...0⟩ and plays the circuit in order.
/// Measurements collapse the state and write the classical register, so
/// gates after a measurement see the collapsed qubit. The recorded
/// bitstring is the classical register with the highest bit leftmost.
/// A circuit without classical bits is sampled on all qubits at the end.
pub struct SimulatorBackend {
    config: BackendConfig,
    capabilities: Capabilities,
    max_qubits: u32,
    seed: Option<u64>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            capabilities: Capabilities::simulator(max_qubits),
            max_qubits,
            seed: None,
        }
    }

    /// Fix the RNG seed. Each execution restarts from this seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Play `instructions` once and return the recorded bitstring.
    fn run_shot(
        instructions: &[Instruction],
        num_qubits: usize,
        num_clbits: usize,
        rng: &mut StdRng,
    ) -> String {
        let mut sv = Statevector::new(num_qubits);
        let mut register = vec![false; num_clbits];

        for inst in instructions {
            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    let qubits: Vec<_> = inst.qubits.iter().map(|q| q.index()).collect();
                    sv.apply_gate(gate.kind, &qubits);
                }
                InstructionKind::Measure => {
                    for (qubit, clbit) in inst.qubits.iter().zip(&inst.clbits) {
                        register[clbit.index()] = sv.measure(qubit.index(), rng);
                    }
                }
                InstructionKind::Reset => {
                    for qubit in &inst.qubits {
                        sv.reset(qubit.index(), rng);
                    }
                }
                InstructionKind::Barrier => {}
            }
        }

        if num_clbits == 0 {
            let outcome = sv.sample(rng);
            return sv.outcome_to_bitstring(outcome);
        }

        register
            .iter()
            .rev()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect()
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    #[allow(clippy::cast_possible_truncation)]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        let num_clbits = circuit.num_clbits();
        debug!("Starting simulation: {num_qubits} qubits, {num_clbits} clbits, {shots} shots");

        let instructions: Vec<_> = circuit.instructions().cloned().collect();
        debug!("Circuit has {} instructions", instructions.len());

        let mut rng = self.rng();
        let mut counts = Counts::new();

        for shot in 0..shots {
            let bitstring = Self::run_shot(&instructions, num_qubits, num_clbits, &mut rng);
            counts.insert(bitstring, 1);

            if shot > 0 && shot % 1000 == 0 {
                debug!("Completed {shot} shots");
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {elapsed:?}");

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        Ok(self.run_simulation(circuit, shots))
    }
}

impl BackendFactory for SimulatorBackend {
    #[allow(clippy::cast_possible_truncation)]
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .get_u64("max_qubits")?
            .map_or(DEFAULT_MAX_QUBITS, |v| v as u32);
        let seed = config.get_u64("seed")?;

        Ok(Self {
            capabilities: Capabilities::simulator(max_qubits),
            config,
            max_qubits,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtele_ir::{ClbitId, QubitId};

    /// Standard teleportation of |1⟩ with unconditioned corrections.
    fn teleport_one() -> Circuit {
        let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));
        let mut circuit = Circuit::with_size("teleport", 3, 3);
        circuit
            .x(q0)
            .unwrap()
            .h(q1)
            .unwrap()
            .cx(q1, q2)
            .unwrap()
            .cx(q0, q1)
            .unwrap()
            .h(q0)
            .unwrap()
            .measure(q0, ClbitId(0))
            .unwrap()
            .measure(q1, ClbitId(1))
            .unwrap()
            .cx(q1, q2)
            .unwrap()
            .cz(q0, q2)
            .unwrap()
            .measure(q2, ClbitId(2))
            .unwrap();
        circuit
    }

    #[test]
    fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();

        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert_eq!(backend.name(), "simulator");
    }

    #[test]
    fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::bell().unwrap();
        let result = backend.run(&circuit, 1000).unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[test]
    fn test_simulator_ghz_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::ghz(3).unwrap();
        let result = backend.run(&circuit, 1000).unwrap();

        let counts = &result.counts;
        assert_eq!(counts.get("000") + counts.get("111"), 1000);
    }

    #[test]
    fn test_unmeasured_circuit_samples_all_qubits() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("x", 2, 0);
        circuit.x(QubitId(0)).unwrap();

        let result = backend.run(&circuit, 10).unwrap();
        assert_eq!(result.counts.get("01"), 10);
    }

    #[test]
    fn test_teleport_one_always_arrives() {
        let backend = SimulatorBackend::new();
        let result = backend.run(&teleport_one(), 1024).unwrap();

        assert_eq!(result.counts.total_shots(), 1024);
        for (bitstring, _) in result.counts.iter() {
            assert!(bitstring.starts_with('1'), "c2 was 0 in {bitstring}");
        }
        // The Bell measurement outcomes are uniform, so all four show up.
        assert_eq!(result.counts.len(), 4);
    }

    #[test]
    fn test_seed_reproducible() {
        let circuit = Circuit::ghz(3).unwrap();
        let a = SimulatorBackend::new().with_seed(42).run(&circuit, 500).unwrap();
        let b = SimulatorBackend::new().with_seed(42).run(&circuit, 500).unwrap();
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_reset_clears_qubit() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("reset", 1, 1);
        circuit
            .h(QubitId(0))
            .unwrap()
            .reset(QubitId(0))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap();

        let result = backend.run(&circuit, 100).unwrap();
        assert_eq!(result.counts.get("0"), 100);
    }

    #[test]
    fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::with_max_qubits(5);

        let circuit = Circuit::with_size("test", 10, 0);
        let result = backend.execute(&circuit, 100);

        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[test]
    fn test_from_config() {
        let config = BackendConfig::new("seeded")
            .with_extra("max_qubits", serde_json::json!(4))
            .with_extra("seed", serde_json::json!(9));
        let backend = SimulatorBackend::from_config(config).unwrap();

        assert_eq!(backend.name(), "seeded");
        assert_eq!(backend.capabilities().num_qubits, 4);
        assert_eq!(backend.seed(), Some(9));

        let bad = BackendConfig::new("bad").with_extra("seed", serde_json::json!("x"));
        assert!(matches!(
            SimulatorBackend::from_config(bad),
            Err(HalError::Configuration(_))
        ));
    }
}
