//! Config Validation Tests
//!
//! Typo detection on raw TOML and range validation of parsed configs,
//! exercised independently from the simulation pass.

use std::io::Write;

use twin_telemetry::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use twin_telemetry::config::{ConfigError, OutputFormat, SimConfig};
use twin_telemetry::Simulator;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_run_section_warns_with_suggestion() {
    let toml_str = r#"
[run]
sampels = 500
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert_eq!(warnings[0].field, "run.sampels");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("run.samples"));
    assert!(warnings[0].to_string().contains("did you mean 'run.samples'?"));
}

#[test]
fn typo_in_nested_event_section_warns() {
    let toml_str = r#"
[events.bearing]
treshold = 0.9
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("events.bearing.threshold"));

    // The typo is ignored; the rest of the process keeps its defaults
    let config = SimConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.events.bearing.threshold, 0.95);
}

#[test]
fn single_event_field_override_loads() {
    let config = SimConfig::from_toml_str("[events.bearing]\nthreshold = 0.9\n").unwrap();
    assert_eq!(config.events.bearing.threshold, 0.9);
    assert_eq!(config.events.bearing.period, 2000.0);
    assert!(Simulator::new(config).is_ok());
}

#[test]
fn misspelled_section_warns_for_every_key_below_it() {
    let toml_str = r#"
[evnts.bearing]
period = 1500.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    let fields: Vec<&str> = warnings.iter().map(|w| w.field.as_str()).collect();
    assert_eq!(fields, vec!["evnts", "evnts.bearing", "evnts.bearing.period"]);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("events"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[run]
samples = 5000
interval_secs = 0.5
start = "2024-03-01T08:00:00Z"
seed = 7

[cycle]
length = 200
idle_fraction = 0.25

[degradation]
minor_wear_at = 0.4
major_wear_at = 0.7
crack_at = 0.9

[blade]
types = ["Delta Form", "Square Form"]

[events.bearing]
period = 1500.0
noise_std = 0.3
threshold = 0.9

[output]
dir = "out"
format = "json"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(warnings.is_empty(), "Unexpected warnings: {warnings:?}");

    let config = SimConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.run.samples, 5000);
    assert_eq!(config.blade.types.len(), 2);
    assert_eq!(config.output.format, OutputFormat::Json);
    // Unset fields keep their defaults
    assert_eq!(config.events.bearing.phase, 0.0);
    assert_eq!(config.events.electrical.period, 2500.0);
}

#[test]
fn completely_unrelated_key_has_no_suggestion() {
    let known = known_config_keys();
    assert_eq!(suggest_correction("zzzzzzzzzzzz", &known), None);
}

#[test]
fn syntax_errors_are_left_to_the_parser() {
    assert!(validate_unknown_keys("[run\nsamples = ").is_empty());
    assert!(matches!(
        SimConfig::from_toml_str("[run\nsamples = "),
        Err(ConfigError::Parse(..))
    ));
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn zero_length_run_is_fatal() {
    let mut config = SimConfig::default();
    config.run.samples = 0;
    let (errors, _) = validate_ranges(&config);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("run.samples"));

    config.run.samples = 1;
    assert!(matches!(Simulator::new(config), Err(ConfigError::Validation(_))));
}

#[test]
fn non_positive_cycle_length_is_fatal() {
    let mut config = SimConfig::default();
    config.cycle.length = 0;
    let (errors, _) = validate_ranges(&config);
    assert!(errors.iter().any(|e| e.contains("cycle.length")));
}

#[test]
fn unordered_degradation_thresholds_are_fatal() {
    let mut config = SimConfig::default();
    config.degradation.major_wear_at = 0.45;
    let (errors, _) = validate_ranges(&config);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("strictly increasing"));

    config.degradation.major_wear_at = 0.8;
    config.degradation.crack_at = 1.0;
    let (errors, _) = validate_ranges(&config);
    assert!(errors.iter().any(|e| e.contains("degradation.crack_at")));
}

#[test]
fn bad_interval_and_idle_fraction_are_fatal() {
    let mut config = SimConfig::default();
    config.run.interval_secs = 0.0;
    config.cycle.idle_fraction = 1.0;
    let (errors, _) = validate_ranges(&config);
    assert_eq!(errors.len(), 2, "{errors:?}");
}

#[test]
fn empty_blade_catalogue_is_fatal() {
    let mut config = SimConfig::default();
    config.blade.types.clear();
    let (errors, _) = validate_ranges(&config);
    assert!(errors.iter().any(|e| e.contains("blade.types")));
}

#[test]
fn run_shorter_than_a_cycle_only_warns() {
    let mut config = SimConfig::default();
    config.run.samples = 100;
    let (errors, warnings) = validate_ranges(&config);
    assert!(errors.is_empty());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "cycle.length");
    assert!(Simulator::new(config).is_ok());
}

#[test]
fn silent_event_process_only_warns() {
    let mut config = SimConfig::default();
    config.events.electrical.noise_std = 0.0;
    let (errors, warnings) = validate_ranges(&config);
    assert!(errors.is_empty());
    assert_eq!(warnings[0].field, "events.electrical.threshold");
}

// ============================================================================
// Loading From Disk
// ============================================================================

#[test]
fn load_from_file_validates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[run]\nsamples = 0").unwrap();
    let err = SimConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    // read_file parses without validating so overrides can still apply
    let config = SimConfig::read_file(file.path()).unwrap();
    assert_eq!(config.run.samples, 0);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = SimConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn serialized_defaults_load_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twin_sim.toml");
    std::fs::write(&path, SimConfig::default().to_toml().unwrap()).unwrap();
    assert_eq!(SimConfig::load_from_file(&path).unwrap(), SimConfig::default());
}
