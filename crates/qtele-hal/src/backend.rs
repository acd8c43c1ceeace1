//! Backend trait and configuration.
//!
//! The [`Backend`] trait is synchronous: a call to [`Backend::execute`]
//! blocks until every shot has been sampled.
//!
//! ```text
//!   capabilities() ──→ validate() ──→ execute()
//!    (&ref, cached)     (fallible)     (blocking)
//! ```
//!
//! | Method | Required | Returns |
//! |--------|----------|---------|
//! | `name()` | yes | `&str` |
//! | `capabilities()` | yes | `&Capabilities` |
//! | `validate()` | provided | `HalResult<ValidationResult>` |
//! | `execute()` | yes | `HalResult<ExecutionResult>` |
//! | `run()` | provided | `HalResult<ExecutionResult>` |

use serde::{Deserialize, Serialize};
use tracing::debug;

use qtele_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Backend-specific settings.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an unsigned integer setting, failing if present but malformed.
    pub fn get_u64(&self, key: &str) -> HalResult<Option<u64>> {
        match self.extra.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| {
                HalError::Configuration(format!(
                    "'{key}' must be a non-negative integer, got {value}"
                ))
            }),
        }
    }
}

/// Trait for quantum backends.
///
/// `capabilities()` must be cached at construction time. Implementations
/// only need `execute`; callers should go through [`Backend::run`], which
/// validates the circuit and the shot count first.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Validate a circuit against backend constraints.
    ///
    /// The default checks qubit count and gate support.
    fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        Ok(self.capabilities().check(circuit))
    }

    /// Execute `circuit` for `shots` repetitions and return the counts.
    fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;

    /// Validate, check the shot count, then execute.
    fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        if let ValidationResult::Invalid { reasons } = self.validate(circuit)? {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let max_shots = self.capabilities().max_shots;
        if shots == 0 || shots > max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} not in 1..={max_shots}"
            )));
        }

        debug!(backend = self.name(), circuit = circuit.name(), shots, "Executing circuit");
        self.execute(circuit, shots)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capabilities(&self) -> &Capabilities {
        (**self).capabilities()
    }

    fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        (**self).validate(circuit)
    }

    fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        (**self).execute(circuit, shots)
    }
}

/// Result of circuit validation against backend constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Circuit is valid and can be executed directly.
    Valid,
    /// Circuit is invalid for this backend.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Counts;
    use qtele_ir::QubitId;

    /// Reports every shot as all zeros.
    struct ZeroBackend {
        capabilities: Capabilities,
    }

    impl Backend for ZeroBackend {
        fn name(&self) -> &str {
            "zero"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.capabilities
        }

        fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
            let mut counts = Counts::new();
            counts.insert("0".repeat(circuit.num_clbits()), u64::from(shots));
            Ok(ExecutionResult::new(counts, shots))
        }
    }

    fn zero_backend() -> ZeroBackend {
        ZeroBackend {
            capabilities: Capabilities::simulator(2).with_max_shots(100),
        }
    }

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test")
            .with_extra("seed", serde_json::json!(42))
            .with_extra("label", serde_json::json!("x"));

        assert_eq!(config.name, "test");
        assert_eq!(config.get_u64("seed").unwrap(), Some(42));
        assert_eq!(config.get_u64("missing").unwrap(), None);
        assert!(matches!(
            config.get_u64("label"),
            Err(HalError::Configuration(_))
        ));
    }

    #[test]
    fn test_validation_result_is_valid() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(!ValidationResult::Invalid { reasons: vec![] }.is_valid());
    }

    #[test]
    fn test_run_executes_valid_circuit() {
        let backend = zero_backend();
        let circuit = Circuit::bell().unwrap();
        let result = backend.run(&circuit, 50).unwrap();
        assert_eq!(result.counts.get("00"), 50);
        assert_eq!(result.shots, 50);
    }

    #[test]
    fn test_run_rejects_shot_count() {
        let backend = zero_backend();
        let circuit = Circuit::bell().unwrap();

        assert!(matches!(backend.run(&circuit, 0), Err(HalError::InvalidShots(_))));
        assert!(matches!(backend.run(&circuit, 101), Err(HalError::InvalidShots(_))));
    }

    #[test]
    fn test_run_rejects_wide_circuit() {
        let backend: Box<dyn Backend> = Box::new(zero_backend());
        let mut circuit = Circuit::with_size("wide", 3, 0);
        circuit.h(QubitId(2)).unwrap();

        match backend.run(&circuit, 10) {
            Err(HalError::InvalidCircuit(msg)) => assert!(msg.contains("3 qubits")),
            other => panic!("expected InvalidCircuit, got {other:?}"),
        }
    }
}
