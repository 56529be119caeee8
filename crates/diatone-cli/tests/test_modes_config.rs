//! Integration tests for the step-pattern config file and JSON output.

use std::path::PathBuf;
use std::process::ExitCode;

use diatone_cli::commands::json_output::{config_error_to_json, CommandOutput};
use diatone_cli::commands::{modes, scale};
use diatone_cli::config::{load_mode_table, ModesConfig};
use diatone_theory::{Mode, Note};
use pretty_assertions::assert_eq;

fn write_modes(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("modes.json");
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
fn test_custom_pattern_spells_scale() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_modes(
        &tmp,
        r#"{ "patterns": { "harmonic_major_ish": [2, 2, 1, 2, 1, 2, 2] } }"#,
    );

    let table = load_mode_table(path.to_str()).unwrap();
    let mode = Mode::with_table(&Note::new("G").unwrap(), "harmonic_major_ish", &table).unwrap();
    assert_eq!(mode.names(), ["G", "A", "B", "C", "D", "Eb", "F"]);
}

#[test]
fn test_file_overrides_built_in() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_modes(&tmp, r#"{ "patterns": { "major": [2, 1, 2, 2, 1, 2, 2] } }"#);

    let table = load_mode_table(path.to_str()).unwrap();
    let mode = Mode::with_table(&Note::new("C").unwrap(), "major", &table).unwrap();
    assert_eq!(mode.names(), ["C", "D", "Eb", "F", "G", "Ab", "Bb"]);
}

#[test]
fn test_config_round_trips_through_serde() {
    let mut config = ModesConfig::default();
    config
        .patterns
        .insert("dorian_copy".to_string(), vec![2, 1, 2, 2, 2, 1, 2]);
    let json = serde_json::to_string(&config).unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let path = write_modes(&tmp, &json);
    assert_eq!(ModesConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_bad_pattern_reports_theory_code_and_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_modes(&tmp, r#"{ "patterns": { "bad": [2, 2, 2, 2, 2, 2, 2] } }"#);

    let err = load_mode_table(path.to_str()).unwrap_err();
    let json = config_error_to_json(&err);
    assert_eq!(json.code, "THEORY_009");
    assert_eq!(json.file, Some(path.display().to_string()));

    let output: CommandOutput<()> = CommandOutput::failure(vec![json]);
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["errors"][0]["code"], "THEORY_009");
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn test_commands_accept_modes_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_modes(&tmp, r#"{ "patterns": { "lydian_dominant": [2, 2, 2, 1, 2, 1, 2] } }"#);

    assert_eq!(
        scale::run("C", "lydian_dominant", 4, None, path.to_str(), true).unwrap(),
        ExitCode::SUCCESS
    );
    assert_eq!(modes::run(path.to_str(), false).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_unparseable_file_fails_both_modes() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_modes(&tmp, "{ not json");

    assert!(scale::run("C", "major", 4, None, path.to_str(), false).is_err());
    assert_eq!(
        scale::run("C", "major", 4, None, path.to_str(), true).unwrap(),
        ExitCode::from(1)
    );
}
