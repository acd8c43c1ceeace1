//! End-to-end tests against the local simulator.

use std::fs;

use chrono::NaiveDate;
use qtele_adapter_sim::SimulatorBackend;
use qtele_teleport::{InitialState, TeleportConfig, Teleporter, default_filename};
use tempfile::TempDir;

fn teleporter_in(dir: &TempDir, seed: u64) -> Teleporter<SimulatorBackend> {
    let config = TeleportConfig {
        output_dir: dir.path().to_path_buf(),
        seed: Some(seed),
        ..TeleportConfig::default()
    };
    Teleporter::with_config(SimulatorBackend::new().with_seed(seed), config)
}

#[test]
fn test_one_is_teleported_and_saved() {
    let dir = TempDir::new().unwrap();
    let teleporter = teleporter_in(&dir, 11);

    let result = teleporter.run(&InitialState::One, true).unwrap();
    assert_eq!(result.counts.total_shots(), 1024);
    assert!((result.receiver_one_fraction() - 1.0).abs() < f64::EPSILON);

    let path = dir.path().join(default_filename(&result));
    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["initial_state"], "1");
    assert_eq!(saved["teleported_state"], serde_json::json!([[0.0, 0.0], [1.0, 0.0]]));
    assert_eq!(saved["circuit_depth"], 7);
    assert_eq!(saved["total_gates"], 10);
}

#[test]
fn test_one_outcomes_have_receiver_bit_leftmost() {
    let teleporter = Teleporter::new(SimulatorBackend::new().with_seed(1));
    let result = teleporter.run(&InitialState::One, false).unwrap();

    // c0 and c1 are fair coins, so all four sender outcomes show up.
    assert_eq!(result.counts.len(), 4);
    for (bits, _) in result.counts.iter() {
        assert_eq!(bits.len(), 3);
        assert!(bits.starts_with('1'), "receiver bit c2 is not leftmost in {bits}");
    }
    assert_eq!(result.counts.get("001") + result.counts.get("011"), 0);
}

#[test]
fn test_plus_counts_shape() {
    let dir = TempDir::new().unwrap();
    let result = teleporter_in(&dir, 3).run(&InitialState::Plus, false).unwrap();

    let total: u64 = result.counts.iter().map(|(_, &n)| n).sum();
    assert_eq!(total, 1024);
    assert!(result.counts.iter().all(|(bits, _)| bits.len() == 3));
    // Z-basis readout of |+⟩ is a fair coin.
    let ones = result.receiver_one_fraction();
    assert!((0.4..0.6).contains(&ones), "receiver read 1 in {ones}");
    // Nothing persisted.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_same_seed_same_counts() {
    let dir = TempDir::new().unwrap();
    let a = teleporter_in(&dir, 99).run(&InitialState::Plus, false).unwrap();
    let b = teleporter_in(&dir, 99).run(&InitialState::Plus, false).unwrap();
    assert_eq!(a.counts, b.counts);
}

#[test]
fn test_unknown_state_uses_plus_reference() {
    let dir = TempDir::new().unwrap();
    let state = InitialState::from("0");
    let result = teleporter_in(&dir, 5).run(&state, false).unwrap();

    assert_eq!(result.initial_state.label(), "0");
    assert_eq!(result.total_gates, 9);
    assert_eq!(
        result.teleported_state,
        qtele_teleport::teleported_state(&InitialState::Plus)
    );
    // Nothing prepared, so |0⟩ arrives.
    assert!(result.receiver_one_fraction() < f64::EPSILON);
}

#[test]
fn test_same_timestamp_overwrites() {
    let dir = TempDir::new().unwrap();
    let teleporter = teleporter_in(&dir, 1);
    let ts = NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_micro_opt(5, 6, 7, 8)
        .unwrap();

    let first = teleporter.run_at(&InitialState::Plus, true, ts).unwrap();
    let second = teleporter.run_at(&InitialState::Plus, true, ts).unwrap();
    assert_eq!(default_filename(&first), default_filename(&second));
    assert_eq!(
        default_filename(&first),
        "teleportation_results_+_2024-03-04T05-06-07-000008.json"
    );

    let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_whole_second_timestamp_has_no_fraction() {
    let dir = TempDir::new().unwrap();
    let teleporter = teleporter_in(&dir, 4);
    let ts = NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_opt(5, 6, 7)
        .unwrap();

    let result = teleporter.run_at(&InitialState::One, true, ts).unwrap();
    assert_eq!(result.timestamp, "2024-03-04T05:06:07");

    let name = "teleportation_results_1_2024-03-04T05-06-07.json";
    assert_eq!(default_filename(&result), name);
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(name)).unwrap()).unwrap();
    assert_eq!(saved["timestamp"], "2024-03-04T05:06:07");
}

#[test]
fn test_save_to_explicit_path() {
    let dir = TempDir::new().unwrap();
    let teleporter = teleporter_in(&dir, 2);
    let result = teleporter.run(&InitialState::One, false).unwrap();

    let target = dir.path().join("custom.json");
    let written = teleporter.save_results(&result, Some(&target)).unwrap();
    assert_eq!(written, target);

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.starts_with("{\n    \"timestamp\""));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let config = TeleportConfig {
        output_dir: dir.path().join("missing"),
        ..TeleportConfig::default()
    };
    let teleporter = Teleporter::with_config(SimulatorBackend::new(), config);

    let err = teleporter.run(&InitialState::One, true).unwrap_err();
    assert!(matches!(err, qtele_teleport::TeleportError::Io(_)));
}
