//! Circuit command implementation.

use anyhow::Result;
use console::style;

use qtele_teleport::{InitialState, teleportation_circuit};

/// Print the teleportation circuit for `state`.
pub fn execute(state: &str) -> Result<()> {
    let initial_state = InitialState::from(state);
    let circuit = teleportation_circuit(&initial_state)?;

    println!(
        "{} Teleportation circuit for {}",
        style("→").cyan().bold(),
        style(format!("|{initial_state}⟩")).green()
    );
    if !initial_state.is_prepared() {
        println!(
            "  {}",
            style(format!("unknown state '{state}', q0 stays in |0⟩")).dim()
        );
    }

    for (i, inst) in circuit.instructions().enumerate() {
        println!("  {:>2}  {}", style(i).dim(), inst);
    }

    println!();
    println!(
        "  {} qubits, {} clbits, depth {}, {} gates",
        circuit.num_qubits(),
        circuit.num_clbits(),
        style(circuit.depth()).yellow(),
        style(circuit.size()).yellow()
    );

    Ok(())
}
