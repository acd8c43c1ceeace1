//! Quantum teleportation experiments.
//!
//! A [`Teleporter`] builds the textbook three-qubit teleportation circuit,
//! runs it on any [`qtele_hal::Backend`] and packages the measurement
//! histogram with circuit metrics into an [`ExperimentResult`], optionally
//! saved as JSON.
//!
//! # Example
//!
//! ```
//! use qtele_adapter_sim::SimulatorBackend;
//! use qtele_teleport::{InitialState, Teleporter};
//!
//! let teleporter = Teleporter::new(SimulatorBackend::new().with_seed(7));
//! let result = teleporter.run(&InitialState::One, false)?;
//!
//! assert_eq!(result.counts.total_shots(), 1024);
//! assert_eq!(result.circuit_depth, 7);
//! // |1⟩ always arrives as |1⟩ on the receiver's bit.
//! assert!(result.counts.iter().all(|(bits, _)| bits.starts_with('1')));
//! # Ok::<(), qtele_teleport::TeleportError>(())
//! ```
//!
//! # Output
//!
//! [`Teleporter::save_results`] writes four-space indented JSON named
//! `teleportation_results_{state}_{timestamp}.json`:
//!
//! ```text
//! {
//!     "timestamp": "2024-05-01T12:30:45.123456",
//!     "initial_state": "1",
//!     "counts": {
//!         "100": 262,
//!         ...
//!     },
//!     "teleported_state": [[0.0, 0.0], [1.0, 0.0]],
//!     "circuit_depth": 7,
//!     "total_gates": 10
//! }
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod experiment;
pub mod persist;
pub mod state;
pub mod teleporter;

pub use circuit::teleportation_circuit;
pub use config::{ConfigError, LoggingConfig, TeleportConfig};
pub use error::{TeleportError, TeleportResult};
pub use experiment::{ExperimentResult, TIMESTAMP_FORMAT, format_timestamp};
pub use persist::default_filename;
pub use state::{InitialState, teleported_state};
pub use teleporter::Teleporter;
