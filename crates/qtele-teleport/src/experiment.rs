//! Experiment records.

use chrono::{NaiveDateTime, Timelike};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use qtele_hal::Counts;

use crate::state::InitialState;

/// Timestamp layout: local time, microsecond precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Layout used when the microsecond field is zero.
pub const TIMESTAMP_FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a timestamp the way it is stored in [`ExperimentResult`].
///
/// The fractional part is omitted when it has no microseconds.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    let layout = if timestamp.nanosecond() / 1_000 == 0 {
        TIMESTAMP_FORMAT_WHOLE_SECONDS
    } else {
        TIMESTAMP_FORMAT
    };
    timestamp.format(layout).to_string()
}

/// Outcome of one teleportation run.
///
/// Serialized fields appear in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// When the run started, see [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    pub initial_state: InitialState,
    /// Bitstring histogram, `c2` leftmost.
    pub counts: Counts,
    /// Reference amplitudes for the receiver's qubit, each as `[re, im]`.
    pub teleported_state: [Complex64; 2],
    pub circuit_depth: usize,
    pub total_gates: usize,
}

impl ExperimentResult {
    /// Total number of recorded shots.
    pub fn shots(&self) -> u64 {
        self.counts.total_shots()
    }

    /// Fraction of shots in which the receiver's bit read 1.
    ///
    /// The receiver's bit (`c2`) is the first character of each bitstring.
    #[allow(clippy::cast_precision_loss)]
    pub fn receiver_one_fraction(&self) -> f64 {
        let total = self.shots();
        if total == 0 {
            return 0.0;
        }
        let ones: u64 = self
            .counts
            .iter()
            .filter(|(bits, _)| bits.starts_with('1'))
            .map(|(_, &n)| n)
            .sum();
        ones as f64 / total as f64
    }
}
