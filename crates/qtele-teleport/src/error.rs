//! Error types for teleportation experiments.

use qtele_hal::HalError;
use qtele_ir::IrError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building, running or saving an experiment.
#[derive(Debug, Error)]
pub enum TeleportError {
    #[error("Circuit error: {0}")]
    Ir(#[from] IrError),

    #[error("Backend error: {0}")]
    Backend(#[from] HalError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for teleportation operations.
pub type TeleportResult<T> = Result<T, TeleportError>;
