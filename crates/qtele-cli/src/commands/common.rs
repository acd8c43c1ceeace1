//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing_subscriber::EnvFilter;

use qtele_adapter_sim::SimulatorBackend;
use qtele_hal::{BackendConfig, BackendFactory, Counts};
use qtele_teleport::TeleportConfig;

/// Load configuration and install the log subscriber.
///
/// Without `-v` the configured level applies; each `-v` raises it to
/// info, debug, then trace.
pub fn load_config(path: Option<&Path>, verbose: u8) -> Result<TeleportConfig> {
    let config = TeleportConfig::load(path).context("Failed to load configuration")?;

    let filter = match verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    Ok(config)
}

/// Build the simulator described by `config`.
pub fn simulator_from_config(config: &TeleportConfig) -> Result<SimulatorBackend> {
    let backend_config = BackendConfig::new("simulator")
        .with_extra("max_qubits", serde_json::json!(config.max_qubits))
        .with_extra("seed", serde_json::json!(config.seed));

    SimulatorBackend::from_config(backend_config).context("Failed to create simulator")
}

/// Print a count histogram, most frequent outcome first.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn print_counts(counts: &Counts) {
    let sorted = counts.sorted();
    let total = counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = **count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }
}
