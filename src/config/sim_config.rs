//! Simulation Configuration - every run constant as an operator-tunable TOML value
//!
//! Each struct implements `Default` with values matching the reference
//! generator, so a run with no config file reproduces the stock dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "TWIN_SIM_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const LOCAL_CONFIG_FILE: &str = "twin_sim.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one simulation run.
///
/// Load with `SimConfig::load()` which searches:
/// 1. `$TWIN_SIM_CONFIG` env var
/// 2. `./twin_sim.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimConfig {
    /// Run length, sampling interval, start time and seed
    #[serde(default)]
    pub run: RunConfig,

    /// Load/idle operating cycle
    #[serde(default)]
    pub cycle: CycleConfig,

    /// Progress thresholds of the blade lifecycle
    #[serde(default)]
    pub degradation: DegradationConfig,

    /// Blade type catalogue
    #[serde(default)]
    pub blade: BladeConfig,

    /// Sparse fault event processes
    #[serde(default)]
    pub events: EventsConfig,

    /// Dataset output location and format
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimConfig {
    /// Load configuration using the standard search order:
    /// 1. `$TWIN_SIM_CONFIG` environment variable
    /// 2. `./twin_sim.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), samples = config.run.samples, "Loaded simulation config from TWIN_SIM_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from TWIN_SIM_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "TWIN_SIM_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./twin_sim.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(samples = config.run.samples, "Loaded simulation config from ./twin_sim.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./twin_sim.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No twin_sim.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    ///
    /// Unknown keys are reported as warnings; the parsed config is validated
    /// before it is returned.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file without validating ranges, for callers
    /// that apply overrides before validation.
    pub fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse a TOML document without validating ranges.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate the config before any sample is generated.
    ///
    /// Impossible values are errors; suspicious ones are logged as warnings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// [run]
// ============================================================================

/// Fixed-length run sampled at a fixed interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of samples N
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Seconds between consecutive samples
    #[serde(default = "default_interval_secs")]
    pub interval_secs: f64,

    /// Timestamp of sample 0; wall clock at run start when unset
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,

    /// Seed of the run's single random stream
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_samples() -> usize { defaults::DEFAULT_SAMPLES }
fn default_interval_secs() -> f64 { defaults::DEFAULT_INTERVAL_SECS }
fn default_seed() -> u64 { defaults::DEFAULT_SEED }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            interval_secs: default_interval_secs(),
            start: None,
            seed: default_seed(),
        }
    }
}

// ============================================================================
// [cycle]
// ============================================================================

/// Repeating load/idle window: idle for the leading `idle_fraction` of each
/// cycle, loaded for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Samples per cycle
    #[serde(default = "default_cycle_length")]
    pub length: usize,

    /// Leading fraction of each cycle spent idle
    #[serde(default = "default_idle_fraction")]
    pub idle_fraction: f64,
}

fn default_cycle_length() -> usize { defaults::DEFAULT_CYCLE_LENGTH }
fn default_idle_fraction() -> f64 { defaults::DEFAULT_IDLE_FRACTION }

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            length: default_cycle_length(),
            idle_fraction: default_idle_fraction(),
        }
    }
}

// ============================================================================
// [degradation]
// ============================================================================

/// Progress values at which the blade enters each worn state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationConfig {
    #[serde(default = "default_minor_wear_at")]
    pub minor_wear_at: f64,
    #[serde(default = "default_major_wear_at")]
    pub major_wear_at: f64,
    #[serde(default = "default_crack_at")]
    pub crack_at: f64,
}

fn default_minor_wear_at() -> f64 { 0.5 }
fn default_major_wear_at() -> f64 { 0.8 }
fn default_crack_at() -> f64 { 0.95 }

impl Default for DegradationConfig {
    fn default() -> Self {
        Self {
            minor_wear_at: default_minor_wear_at(),
            major_wear_at: default_major_wear_at(),
            crack_at: default_crack_at(),
        }
    }
}

// ============================================================================
// [blade]
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BladeConfig {
    /// Blade types rotated through, one per operating cycle
    #[serde(default = "default_blade_types")]
    pub types: Vec<String>,
}

fn default_blade_types() -> Vec<String> {
    defaults::BLADE_TYPES.iter().map(|s| (*s).to_string()).collect()
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self { types: default_blade_types() }
    }
}

// ============================================================================
// [events]
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default = "EventProcessConfig::bearing", deserialize_with = "deserialize_bearing")]
    pub bearing: EventProcessConfig,
    #[serde(default = "EventProcessConfig::electrical", deserialize_with = "deserialize_electrical")]
    pub electrical: EventProcessConfig,
}

/// An `[events.*]` table as written; unset fields fall back to the
/// process's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialEventProcess {
    period: Option<f64>,
    phase: Option<f64>,
    noise_std: Option<f64>,
    threshold: Option<f64>,
}

impl PartialEventProcess {
    fn over(self, base: EventProcessConfig) -> EventProcessConfig {
        EventProcessConfig {
            period: self.period.unwrap_or(base.period),
            phase: self.phase.unwrap_or(base.phase),
            noise_std: self.noise_std.unwrap_or(base.noise_std),
            threshold: self.threshold.unwrap_or(base.threshold),
        }
    }
}

fn deserialize_bearing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EventProcessConfig, D::Error> {
    Ok(PartialEventProcess::deserialize(deserializer)?.over(EventProcessConfig::bearing()))
}

fn deserialize_electrical<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EventProcessConfig, D::Error> {
    Ok(PartialEventProcess::deserialize(deserializer)?.over(EventProcessConfig::electrical()))
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            bearing: EventProcessConfig::bearing(),
            electrical: EventProcessConfig::electrical(),
        }
    }
}

/// Sinusoid-plus-noise event process: fires when
/// `sin(2π·i/period + phase) + N(0, noise_std) > threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventProcessConfig {
    /// Period of the sinusoidal base, in samples
    pub period: f64,
    /// Phase offset (radians)
    #[serde(default)]
    pub phase: f64,
    /// Standard deviation of the additive noise
    pub noise_std: f64,
    /// Firing threshold
    pub threshold: f64,
}

impl EventProcessConfig {
    pub fn bearing() -> Self {
        Self { period: 2000.0, phase: 0.0, noise_std: 0.2, threshold: 0.95 }
    }

    pub fn electrical() -> Self {
        Self { period: 2500.0, phase: 1.0, noise_std: 0.25, threshold: 1.1 }
    }
}

// ============================================================================
// [output]
// ============================================================================

/// Table encoding written by the dataset writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited text with a header row
    #[default]
    Csv,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" | "jsonl" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected csv or json)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the three dataset files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_output_dir() -> PathBuf { PathBuf::from(defaults::DEFAULT_OUTPUT_DIR) }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = SimConfig::default();
        assert_eq!(config.run.samples, 10_000);
        assert_eq!(config.run.seed, 42);
        assert_eq!(config.cycle.length, 300);
        assert_eq!(config.blade.types.len(), 7);
        assert!((config.events.electrical.phase - 1.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimConfig::from_toml_str(
            r#"
[run]
samples = 500
start = "2024-01-01T00:00:00Z"

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.run.samples, 500);
        assert_eq!(config.run.seed, 42);
        assert!(config.run.start.is_some());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.degradation, DegradationConfig::default());
    }

    #[test]
    fn test_partial_event_table_keeps_process_defaults() {
        let config = SimConfig::from_toml_str("[events.bearing]\nthreshold = 0.9\n").unwrap();
        assert_eq!(config.events.bearing.threshold, 0.9);
        assert_eq!(config.events.bearing.period, 2000.0);
        assert_eq!(config.events.bearing.noise_std, 0.2);
        assert_eq!(config.events.electrical, EventProcessConfig::electrical());

        let config = SimConfig::from_toml_str("[events.electrical]\nperiod = 1200.0\n").unwrap();
        assert_eq!(config.events.electrical.period, 1200.0);
        assert_eq!(config.events.electrical.phase, 1.0);
        assert_eq!(config.events.electrical.threshold, 1.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SimConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = SimConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("jsonl".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("parquet".parse::<OutputFormat>().is_err());
    }
}
