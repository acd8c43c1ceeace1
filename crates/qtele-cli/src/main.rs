//! qtele Command-Line Interface
//!
//! Runs the three-qubit teleportation experiment on the local simulator.
//!
//! ```text
//! qtele run --state 1 --seed 7
//! qtele run --state + --output plus.json
//! qtele circuit --state 1
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

mod commands;

use commands::{circuit, common, run, version};

/// qtele - quantum teleportation on a local statevector simulator
#[derive(Parser)]
#[command(name = "qtele")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML), defaults to ~/.qtele/config.yaml
    #[arg(short, long, global = true, env = "QTELE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the teleportation experiment
    Run {
        /// State to teleport ("+", "1"; anything else leaves |0⟩)
        #[arg(long, default_value = "+", allow_hyphen_values = true)]
        state: String,

        /// Save results to the configured output directory
        #[arg(long)]
        save: bool,

        /// Save results to this file (implies --save)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of shots (overrides config)
        #[arg(short, long)]
        shots: Option<u32>,

        /// Simulator RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the teleportation circuit without running it
    Circuit {
        /// State to prepare on q0
        #[arg(long, default_value = "+", allow_hyphen_values = true)]
        state: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            state,
            save,
            output,
            shots,
            seed,
        } => common::load_config(cli.config.as_deref(), cli.verbose).and_then(|config| {
            run::execute(config, &state, save, output.as_deref(), shots, seed)
        }),

        Commands::Circuit { state } => common::load_config(cli.config.as_deref(), cli.verbose)
            .and_then(|_| circuit::execute(&state)),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
