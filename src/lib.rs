//! Twin Telemetry: synthetic blade and motor telemetry
//!
//! Generates labelled, time-stamped training data for predictive-maintenance
//! models of a machine whose motor drives a cutting blade.
//!
//! ## Architecture
//!
//! - **Config**: TOML run configuration with validation and typo hints
//! - **Simulation**: seeded noise tape, degradation schedule, fault events
//!   and the parallel per-sample pass
//! - **Physics Engine**: blade and motor signal models, health rules, RUL
//! - **Dataset**: motor, blade and combined tables as CSV or JSON Lines
//! - **Inference**: the contract trained models are called through

pub mod config;
pub mod types;
pub mod simulation;
pub mod physics_engine;
pub mod dataset;
pub mod inference;

// Re-export configuration
pub use config::{ConfigError, OutputFormat, SimConfig};

// Re-export commonly used types
pub use types::{
    AssetKind, BladeCondition, BladeSignals, FaultEvents, HealthStatus, MotorSignals, SampleRecord,
};

// Re-export the run driver
pub use simulation::{RunSummary, SimulationRun, Simulator};

// Re-export dataset output
pub use dataset::{assemble, DatasetError, DatasetWriter, TableKind, Tables};

// Re-export the inference boundary
pub use inference::{AssetModel, InferenceError, ModelRegistry, Prediction, SensorReading};
