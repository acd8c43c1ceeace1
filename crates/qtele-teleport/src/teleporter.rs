//! The [`Teleporter`] façade.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, instrument};

use qtele_hal::Backend;

use crate::circuit::teleportation_circuit;
use crate::config::TeleportConfig;
use crate::error::TeleportResult;
use crate::experiment::{ExperimentResult, format_timestamp};
use crate::persist::{default_filename, write_json};
use crate::state::{InitialState, teleported_state};

/// Runs the teleportation circuit on an injected backend.
pub struct Teleporter<B: Backend> {
    backend: B,
    config: TeleportConfig,
}

impl<B: Backend> Teleporter<B> {
    /// Create a teleporter with the default configuration (1024 shots,
    /// results written to the current directory).
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, TeleportConfig::default())
    }

    pub fn with_config(backend: B, config: TeleportConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &TeleportConfig {
        &self.config
    }

    /// Run one experiment stamped with the current local time.
    ///
    /// With `persist`, the record is also written through
    /// [`Teleporter::save_results`] to the default location.
    pub fn run(
        &self,
        initial_state: &InitialState,
        persist: bool,
    ) -> TeleportResult<ExperimentResult> {
        self.run_at(initial_state, persist, Local::now().naive_local())
    }

    /// Same as [`Teleporter::run`] with a fixed timestamp.
    #[instrument(skip(self), fields(backend = self.backend.name()))]
    pub fn run_at(
        &self,
        initial_state: &InitialState,
        persist: bool,
        timestamp: NaiveDateTime,
    ) -> TeleportResult<ExperimentResult> {
        let circuit = teleportation_circuit(initial_state)?;
        let exec = self.backend.run(&circuit, self.config.shots)?;
        debug!(
            "Backend returned {} outcomes over {} shots",
            exec.counts.len(),
            exec.shots
        );

        let result = ExperimentResult {
            timestamp: format_timestamp(&timestamp),
            initial_state: initial_state.clone(),
            counts: exec.counts,
            teleported_state: teleported_state(initial_state),
            circuit_depth: circuit.depth(),
            total_gates: circuit.size(),
        };

        if persist {
            self.save_results(&result, None)?;
        }

        Ok(result)
    }

    /// Write `result` as JSON and return the path written.
    ///
    /// Without `path`, writes `output_dir/`[`default_filename`]. An existing
    /// file is overwritten.
    pub fn save_results(
        &self,
        result: &ExperimentResult,
        path: Option<&Path>,
    ) -> TeleportResult<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => self.config.output_dir.join(default_filename(result)),
        };

        write_json(result, &path)?;
        info!("Results saved to {}", path.display());
        Ok(path)
    }
}
