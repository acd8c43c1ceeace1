//! JSON persistence of experiment records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::TeleportResult;
use crate::experiment::ExperimentResult;

/// Default file name for a record:
/// `teleportation_results_{initial_state}_{timestamp}.json`.
///
/// `':'` and `'.'` in the timestamp become `'-'`. Path separators and `':'`
/// in the state label are replaced as well, so the name never leaves the
/// target directory.
pub fn default_filename(result: &ExperimentResult) -> String {
    let timestamp = result.timestamp.replace([':', '.'], "-");
    let state = result.initial_state.label().replace(['/', '\\', ':'], "-");
    format!("teleportation_results_{state}_{timestamp}.json")
}

/// Render `result` as JSON indented by four spaces.
pub fn to_json_pretty(result: &ExperimentResult) -> TeleportResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    result.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `result` to `path`, replacing any existing file.
pub fn write_json(result: &ExperimentResult, path: &Path) -> TeleportResult<()> {
    let bytes = to_json_pretty(result)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
