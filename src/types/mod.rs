//! Shared data structures for the blade/motor telemetry generator
//!
//! - `state`: discrete lifecycle and health labels (BladeCondition, HealthStatus)
//! - `sample`: per-sample signal records produced by the simulation pass

mod state;
mod sample;

pub use state::*;
pub use sample::*;
