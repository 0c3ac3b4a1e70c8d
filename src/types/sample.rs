//! Per-sample signal records
//!
//! One `SampleRecord` is produced per index of a run. It carries every value
//! the dataset tables project, so table assembly never recomputes a signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BladeCondition, HealthStatus};

/// Blade sensor channels for one sample (already clamped where bounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BladeSignals {
    /// Vibration (mm/s RMS)
    pub vibration: f64,
    /// Cutting torque (Nm), clamped to [5, 60]
    pub torque: f64,
    /// Blade speed (rpm)
    pub speed: f64,
    /// Acoustic noise (dB)
    pub noise: f64,
    /// Blade temperature (°C), clamped to [25, 90]
    pub temperature: f64,
}

/// Sparse fault events firing at one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FaultEvents {
    pub bearing: bool,
    pub electrical: bool,
}

/// Motor sensor channels for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MotorSignals {
    /// Phase A current (A), clamped to [5, 40]
    pub current_a: f64,
    /// Phase B current (A), clamped to [5, 40]
    pub current_b: f64,
    /// Phase C current (A), clamped to [5, 40]
    pub current_c: f64,
    /// Shared load-coupled base current before unbalance (A), unclamped
    pub base_current: f64,
    /// Motor vibration (mm/s), clamped to [0.2, 4.0]
    pub vibration: f64,
    /// Winding temperature (°C), clamped to [30, 110]
    pub temperature: f64,
    /// Shaft speed (rpm)
    pub speed: f64,
    /// Overheat index reached two (torque > 30 and vibration > 1.2)
    pub overheat: bool,
}

/// Everything computed for one sample index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    /// index / (N - 1), in [0, 1]
    pub progress: f64,
    /// Load window of the operating cycle
    pub loaded: bool,
    /// Index into the run's blade type list
    pub blade_type: usize,
    pub condition: BladeCondition,
    pub blade: BladeSignals,
    /// Weighted vibration/torque excess in [0, 1]
    pub stress: f64,
    /// 1 + 1.5 * stress
    pub wear_rate: f64,
    /// Remaining blade cycles, >= 1
    pub blade_rul: f64,
    pub events: FaultEvents,
    pub motor: MotorSignals,
    pub health: HealthStatus,
    /// Remaining motor life, in [1, 500]
    pub motor_rul: f64,
}
