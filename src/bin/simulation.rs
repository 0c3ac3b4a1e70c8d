//! Blade/Motor Telemetry Simulation
//!
//! Generates one run of coupled blade and motor telemetry and writes the
//! motor, blade and combined training tables.
//!
//! # Usage
//! ```bash
//! ./simulation --samples 10000 --seed 42 --output-dir data
//! ./simulation --samples 2000 --format json --stdout combined --quiet > combined.jsonl
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use twin_telemetry::config::CONFIG_ENV_VAR;
use twin_telemetry::{
    assemble, BladeCondition, DatasetWriter, HealthStatus, OutputFormat, RunSummary, SimConfig,
    Simulator, TableKind,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "simulation")]
#[command(about = "Synthetic blade and motor telemetry for predictive-maintenance training")]
#[command(version)]
struct Args {
    /// TOML config file (default: ./twin_sim.toml, then built-in defaults)
    #[arg(short, long, value_name = "PATH", env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Number of samples in the run
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Samples per load/idle operating cycle
    #[arg(long)]
    cycle_length: Option<usize>,

    /// Seconds between samples
    #[arg(long)]
    interval_secs: Option<f64>,

    /// Directory the three tables are written to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Output format: csv or json (JSON Lines)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Stream one table (motor, blade or combined) to stdout instead of writing files
    #[arg(long, value_name = "TABLE")]
    stdout: Option<TableKind>,

    /// Suppress the run log (warnings and table data only)
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Load the base config and apply flag overrides. Not yet validated.
    fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::read_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SimConfig::load(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SimConfig) {
        if let Some(samples) = self.samples {
            config.run.samples = samples;
        }
        if let Some(seed) = self.seed {
            config.run.seed = seed;
        }
        if let Some(length) = self.cycle_length {
            config.cycle.length = length;
        }
        if let Some(interval) = self.interval_secs {
            config.run.interval_secs = interval;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir.clone_from(dir);
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

// ============================================================================
// Run Log
// ============================================================================

fn log_line(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

fn log_header(config: &SimConfig, quiet: bool) {
    log_line(&"=".repeat(70), quiet);
    log_line("BLADE/MOTOR TELEMETRY SIMULATION", quiet);
    log_line(&"=".repeat(70), quiet);
    log_line(&format!("  Samples:       {}", config.run.samples), quiet);
    log_line(&format!("  Interval:      {} s", config.run.interval_secs), quiet);
    log_line(&format!("  Seed:          {}", config.run.seed), quiet);
    log_line(
        &format!(
            "  Cycle:         {} samples, {:.0}% idle",
            config.cycle.length,
            config.cycle.idle_fraction * 100.0
        ),
        quiet,
    );
    log_line(&format!("  Blade types:   {}", config.blade.types.len()), quiet);
    log_line("", quiet);
}

fn log_debrief(summary: &RunSummary, elapsed_secs: f64, quiet: bool) {
    log_line(&"=".repeat(70), quiet);
    log_line("SIMULATION COMPLETE", quiet);
    log_line(&"=".repeat(70), quiet);
    log_line(
        &format!("Samples: {} ({} loaded)", summary.samples, summary.loaded_samples),
        quiet,
    );
    log_line("Blade condition:", quiet);
    for condition in BladeCondition::ALL {
        log_line(
            &format!("  {:<16} {}", condition.label(), summary.condition_count(condition)),
            quiet,
        );
    }
    log_line("Motor health:", quiet);
    for status in HealthStatus::ALL {
        log_line(
            &format!("  {:<16} {}", status.label(), summary.health_count(status)),
            quiet,
        );
    }
    log_line(
        &format!(
            "Fault events: {} bearing, {} electrical",
            summary.bearing_events, summary.electrical_events
        ),
        quiet,
    );
    log_line(
        &format!(
            "Final RUL: blade {:.1}, motor {:.1}",
            summary.final_blade_rul, summary.final_motor_rul
        ),
        quiet,
    );
    log_line(&format!("Real time: {elapsed_secs:.2}s"), quiet);
    log_line(&"=".repeat(70), quiet);
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = args.resolve_config()?;
    let simulator = Simulator::new(config).context("Invalid simulation config")?;
    log_header(simulator.config(), args.quiet);

    let started = Instant::now();
    let run = simulator.run();
    let tables = assemble(&run);

    let output = &simulator.config().output;
    let writer = DatasetWriter::new(&output.dir, output.format);

    match args.stdout {
        Some(kind) => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writer
                .write_kind(kind, &tables, &mut lock)
                .with_context(|| format!("Failed to stream {kind} table to stdout"))?;
            lock.flush()?;
        }
        None => {
            let paths = writer
                .write_all(&tables)
                .with_context(|| format!("Failed to write dataset to {}", writer.dir().display()))?;
            info!(
                motor = %paths.motor.display(),
                blade = %paths.blade.display(),
                combined = %paths.combined.display(),
                "Dataset written"
            );
        }
    }

    log_debrief(&run.summary, started.elapsed().as_secs_f64(), args.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_config_flag_reads_env_var() {
        let command = Args::command();
        let config = command
            .get_arguments()
            .find(|arg| arg.get_id() == "config")
            .unwrap();
        assert_eq!(config.get_env(), Some(std::ffi::OsStr::new(CONFIG_ENV_VAR)));
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "simulation",
            "--samples",
            "120",
            "--seed",
            "9",
            "--cycle-length",
            "40",
            "--format",
            "json",
            "--stdout",
            "blade",
        ])
        .unwrap();
        assert_eq!(args.stdout, Some(TableKind::Blade));

        let mut config = SimConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.run.samples, 120);
        assert_eq!(config.run.seed, 9);
        assert_eq!(config.cycle.length, 40);
        assert_eq!(config.output.format, OutputFormat::Json);
    }
}

