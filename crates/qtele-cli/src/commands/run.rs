//! Run command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use qtele_teleport::{InitialState, TeleportConfig, Teleporter};

use super::common::{print_counts, simulator_from_config};

/// Execute the run command.
pub fn execute(
    mut config: TeleportConfig,
    state: &str,
    save: bool,
    output: Option<&Path>,
    shots: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    if let Some(shots) = shots {
        config.shots = shots;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().context("Invalid run options")?;

    let initial_state: InitialState = state.into();
    println!(
        "{} Teleporting {} ({} shots)",
        style("→").cyan().bold(),
        style(format!("|{initial_state}⟩")).green(),
        config.shots
    );

    let backend = simulator_from_config(&config)?;
    debug!(seed = ?config.seed, max_qubits = config.max_qubits, "Simulator ready");
    let teleporter = Teleporter::with_config(backend, config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Simulating...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = teleporter.run(&initial_state, false);
    spinner.finish_and_clear();
    let result = result?;

    println!(
        "  Circuit: 3 qubits, depth {}, {} gates",
        result.circuit_depth, result.total_gates
    );
    println!(
        "\n{} Results ({} shots, bits c2 c1 c0):",
        style("✓").green().bold(),
        result.shots()
    );
    print_counts(&result.counts);

    let [alpha, beta] = result.teleported_state;
    println!(
        "\n  Expected on q2: {:.4}|0⟩ + {:.4}|1⟩",
        style(alpha.re).yellow(),
        style(beta.re).yellow()
    );
    println!(
        "  Receiver read 1: {:.2}%",
        result.receiver_one_fraction() * 100.0
    );

    if save || output.is_some() {
        let path = teleporter.save_results(&result, output)?;
        println!(
            "\n{} Results saved to {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}
