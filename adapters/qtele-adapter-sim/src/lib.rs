//! qtele Local Statevector Simulator
//!
//! A statevector simulator implementing [`qtele_hal::Backend`]. It keeps
//! the full `2^n` amplitude vector, so it is limited to about 20-25
//! qubits.
//!
//! # Features
//!
//! - **All Standard Gates**: every gate in `qtele-ir`
//! - **Mid-circuit Measurement**: measurements collapse the state and
//!   later gates act on the collapsed qubit
//! - **Reproducible Sampling**: optional RNG seed
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```
//! use qtele_adapter_sim::SimulatorBackend;
//! use qtele_hal::Backend;
//! use qtele_ir::Circuit;
//!
//! let backend = SimulatorBackend::new().with_seed(1);
//! let result = backend.run(&Circuit::bell()?, 1000)?;
//!
//! // Expect ~50% |00⟩ and ~50% |11⟩
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod simulator;
mod statevector;

pub use simulator::{DEFAULT_MAX_QUBITS, SimulatorBackend};
pub use statevector::Statevector;
