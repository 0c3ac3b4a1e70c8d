//! Simulation driver
//!
//! Generates one complete, bounded run of coupled blade/motor telemetry.
//!
//! ## Pass structure
//!
//! 1. Validate the config (fail fast, before any sample exists)
//! 2. Draw every random stream into a `NoiseTape` from one seeded RNG
//! 3. Synthesise all samples in parallel with rayon; each sample is a pure
//!    function of its index, the config and its slice of the tape
//! 4. Summarise the run (condition/health histograms, event counts)
//!
//! Identical seed and config always give identical records, whatever the
//! thread count.

pub mod events;
pub mod noise;
pub mod schedule;
pub mod time_base;

pub use events::{event_fires, FaultEventModel};
pub use noise::{gaussian_noise, normalize_walk, smoothed_noise, NoiseTape, SampleNoise};
pub use schedule::{DegradationSchedule, OperatingCycle};
pub use time_base::TimeBase;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ConfigError, SimConfig};
use crate::physics_engine::{
    blade_rul, blade_stress, classify_health, motor_rul, synthesize_blade, synthesize_motor,
    wear_rate, HealthSnapshot,
};
use crate::types::{BladeCondition, HealthStatus, SampleRecord};

// ============================================================================
// Per-Sample Synthesis
// ============================================================================

/// Run-wide, read-only inputs shared by every sample.
#[derive(Debug, Clone)]
struct SampleContext {
    time: TimeBase,
    cycle: OperatingCycle,
    degradation: DegradationSchedule,
    events: FaultEventModel,
    blade_type_count: usize,
}

impl SampleContext {
    fn new(config: &SimConfig, time: TimeBase) -> Self {
        Self {
            time,
            cycle: OperatingCycle::from_config(&config.cycle),
            degradation: DegradationSchedule::from_config(&config.degradation),
            events: FaultEventModel::from_config(&config.events),
            blade_type_count: config.blade.types.len(),
        }
    }

    fn sample(&self, index: usize, noise: &SampleNoise) -> SampleRecord {
        let progress = self.time.progress(index);
        let condition = self.degradation.condition_at(progress);
        let loaded = self.cycle.is_loaded(index);

        let blade = synthesize_blade(condition, loaded, noise);
        let stress = blade_stress(&blade);
        let wear = wear_rate(stress);
        let blade_remaining = blade_rul(condition, progress, wear);

        let events = self.events.at(index, noise);
        let motor = synthesize_motor(&blade, events, noise);
        let health = classify_health(&HealthSnapshot::from_signals(&blade, &motor, events));
        let motor_remaining = motor_rul(progress, health, motor.vibration, motor.temperature);

        SampleRecord {
            index,
            timestamp: self.time.timestamp(index),
            progress,
            loaded,
            blade_type: self.cycle.blade_type_index(index, self.blade_type_count),
            condition,
            blade,
            stress,
            wear_rate: wear,
            blade_rul: blade_remaining,
            events,
            motor,
            health,
            motor_rul: motor_remaining,
        }
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Validated simulation config, ready to generate runs.
///
/// The start time is fixed at construction, so every run from one
/// simulator carries the same timestamps.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    start: DateTime<Utc>,
}

impl Simulator {
    /// Validate `config`; invalid configs never reach sample generation.
    ///
    /// An unset `run.start` resolves to the wall clock here, once.
    pub fn new(mut config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let start = *config.run.start.get_or_insert_with(Utc::now);
        info!(start = %start.to_rfc3339(), "Simulation start time fixed");
        Ok(Self { config, start })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generate a run from the configured seed.
    pub fn run(&self) -> SimulationRun {
        let mut rng = StdRng::seed_from_u64(self.config.run.seed);
        self.run_with_rng(&mut rng)
    }

    /// Generate a run drawing all randomness from `rng`.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> SimulationRun {
        let run = &self.config.run;
        let time = TimeBase::new(self.start, run.interval_secs, run.samples);

        info!(
            samples = run.samples,
            interval_secs = run.interval_secs,
            seed = run.seed,
            start = %self.start.to_rfc3339(),
            "Starting telemetry simulation"
        );

        let tape = NoiseTape::draw(rng, run.samples);
        let context = SampleContext::new(&self.config, time);

        let records: Vec<SampleRecord> = tape
            .as_slice()
            .par_iter()
            .enumerate()
            .map(|(index, noise)| context.sample(index, noise))
            .collect();

        let summary = RunSummary::from_records(&records);
        for (condition, first_index) in &summary.condition_onsets {
            debug!(condition = %condition, index = first_index, "Blade condition reached");
        }
        info!(
            samples = summary.samples,
            loaded = summary.loaded_samples,
            bearing_events = summary.bearing_events,
            electrical_events = summary.electrical_events,
            final_blade_rul = summary.final_blade_rul,
            final_motor_rul = summary.final_motor_rul,
            "Simulation complete"
        );

        SimulationRun {
            blade_types: self.config.blade.types.clone(),
            records,
            summary,
        }
    }
}

// ============================================================================
// Run Output
// ============================================================================

/// A finished run: one record per sample, in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub blade_types: Vec<String>,
    pub records: Vec<SampleRecord>,
    pub summary: RunSummary,
}

impl SimulationRun {
    /// Blade type name of a record from this run.
    pub fn blade_type_name(&self, record: &SampleRecord) -> &str {
        self.blade_types
            .get(record.blade_type)
            .map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run debrief: what the run contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RunSummary {
    pub samples: usize,
    pub loaded_samples: usize,
    /// Samples per blade condition label
    pub condition_counts: BTreeMap<String, usize>,
    /// Samples per motor health label
    pub health_counts: BTreeMap<String, usize>,
    /// First index at which each blade condition appears, in lifecycle order
    pub condition_onsets: Vec<(BladeCondition, usize)>,
    pub bearing_events: usize,
    pub electrical_events: usize,
    pub final_blade_rul: f64,
    pub final_motor_rul: f64,
}

impl RunSummary {
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let mut summary = Self {
            samples: records.len(),
            ..Self::default()
        };

        for record in records {
            summary.loaded_samples += usize::from(record.loaded);
            summary.bearing_events += usize::from(record.events.bearing);
            summary.electrical_events += usize::from(record.events.electrical);
            *summary
                .condition_counts
                .entry(record.condition.label().to_string())
                .or_insert(0) += 1;
            *summary
                .health_counts
                .entry(record.health.label().to_string())
                .or_insert(0) += 1;

            let reached = summary.condition_onsets.last().map(|(c, _)| *c);
            if reached.map_or(true, |c| record.condition > c) {
                summary.condition_onsets.push((record.condition, record.index));
            }
        }

        if let Some(last) = records.last() {
            summary.final_blade_rul = last.blade_rul;
            summary.final_motor_rul = last.motor_rul;
        }
        summary
    }

    /// Samples carrying `status`.
    pub fn health_count(&self, status: HealthStatus) -> usize {
        self.health_counts.get(status.label()).copied().unwrap_or(0)
    }

    /// Samples carrying `condition`.
    pub fn condition_count(&self, condition: BladeCondition) -> usize {
        self.condition_counts.get(condition.label()).copied().unwrap_or(0)
    }
}
