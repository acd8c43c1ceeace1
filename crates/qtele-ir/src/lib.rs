//! qtele Circuit Intermediate Representation
//!
//! Core data structures for describing quantum circuits: qubits and
//! classical bits, a small fixed gate set, instructions, and a wire-based
//! DAG that answers structural questions such as depth and size.
//!
//! # Core Components
//!
//! - **Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`] and the [`Gate`] wrapper
//! - **Instructions**: [`Instruction`], a gate, measurement, reset or barrier
//!   with its operands
//! - **DAG**: [`CircuitDag`], the internal graph representation
//! - **Circuit**: [`Circuit`], the builder API
//!
//! # Example: Bell pair with measurement
//!
//! ```rust
//! use qtele_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2);
//! circuit
//!     .h(QubitId(0))?
//!     .cx(QubitId(0), QubitId(1))?
//!     .measure(QubitId(0), ClbitId(0))?
//!     .measure(QubitId(1), ClbitId(1))?;
//!
//! assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
//! assert_eq!(circuit.size(), 4);
//! # Ok::<(), qtele_ir::IrError>(())
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase gates |
//! | `CX`, `CY`, `CZ` | 2 | Controlled Paulis |
//! | `Swap` | 2 | SWAP gate |
//! | `CCX` | 3 | Toffoli gate |

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex, WireId};
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
