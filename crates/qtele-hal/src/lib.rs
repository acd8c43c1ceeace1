//! qtele Hardware Abstraction Layer
//!
//! This crate defines the interface between circuit producers and the
//! backends that execute them:
//! - A synchronous [`Backend`] trait
//! - [`Capabilities`] describing qubit count, gate set and shot limits
//! - Measurement histograms via [`Counts`] and [`ExecutionResult`]
//!
//! # Implementing a Backend
//!
//! ```
//! use qtele_hal::{Backend, Capabilities, Counts, ExecutionResult, HalResult};
//! use qtele_ir::Circuit;
//!
//! struct AlwaysZero {
//!     capabilities: Capabilities,
//! }
//!
//! impl Backend for AlwaysZero {
//!     fn name(&self) -> &str { "always_zero" }
//!
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
//!         let mut counts = Counts::new();
//!         counts.insert("0".repeat(circuit.num_clbits()), u64::from(shots));
//!         Ok(ExecutionResult::new(counts, shots))
//!     }
//! }
//!
//! let backend = AlwaysZero { capabilities: Capabilities::simulator(2) };
//! let result = backend.run(&Circuit::bell()?, 100)?;
//! assert_eq!(result.counts.get("00"), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, ValidationResult};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
