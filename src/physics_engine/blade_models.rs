//! Blade signal synthesis and remaining-useful-life model
//!
//! Every channel starts from a per-condition baseline and is then perturbed:
//!
//! | Channel     | Sharp / Minor / Major / Crack | Perturbation                               | Clamp    |
//! |-------------|-------------------------------|--------------------------------------------|----------|
//! | Vibration   | 0.6 / 0.9 / 1.3 / 2.4         | N(0, 0.05) + 0.05·drift                    | -        |
//! | Torque      | 21 / 26 / 33 / 36             | loaded: N(0, 1.2), idle: N(-3, 1.0)        | [5, 60]  |
//! | Speed       | 1200 / 1180 / 1160 / 1100     | N(0, 6) − load·N(4, 2)                     | -        |
//! | Noise (dB)  | 68 / 74 / 78 / 85             | N(0, 1) + 0.5·drift                        | -        |
//! | Temperature | 35 / 38 / 42 / 48             | 1.5·load + N(0, 0.6)                       | [25, 90] |

use crate::config::defaults::{BLADE_TEMPERATURE_BOUNDS, BLADE_TORQUE_BOUNDS, RUL_MIN};
use crate::simulation::SampleNoise;
use crate::types::{BladeCondition, BladeSignals};

/// Per-condition baselines of the blade channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeBaseline {
    pub vibration: f64,
    pub torque: f64,
    pub speed: f64,
    pub noise: f64,
    pub temperature: f64,
    /// Remaining cycles at the start of a run in this condition
    pub rul_cycles: f64,
}

/// Indexed by `BladeCondition::index()`.
const BASELINES: [BladeBaseline; 4] = [
    BladeBaseline { vibration: 0.6, torque: 21.0, speed: 1200.0, noise: 68.0, temperature: 35.0, rul_cycles: 380.0 },
    BladeBaseline { vibration: 0.9, torque: 26.0, speed: 1180.0, noise: 74.0, temperature: 38.0, rul_cycles: 150.0 },
    BladeBaseline { vibration: 1.3, torque: 33.0, speed: 1160.0, noise: 78.0, temperature: 42.0, rul_cycles: 60.0 },
    BladeBaseline { vibration: 2.4, torque: 36.0, speed: 1100.0, noise: 85.0, temperature: 48.0, rul_cycles: 10.0 },
];

pub fn blade_baseline(condition: BladeCondition) -> BladeBaseline {
    BASELINES[condition.index()]
}

/// Synthesise one blade sample.
pub fn synthesize_blade(condition: BladeCondition, loaded: bool, noise: &SampleNoise) -> BladeSignals {
    let base = blade_baseline(condition);
    let load = if loaded { 1.0 } else { 0.0 };

    let vibration = base.vibration + 0.05 * noise.blade_vibration + 0.05 * noise.blade_vibration_drift;

    let torque_offset = if loaded {
        1.2 * noise.torque_loaded
    } else {
        -3.0 + 1.0 * noise.torque_idle
    };
    let torque = (base.torque + torque_offset).clamp(BLADE_TORQUE_BOUNDS.0, BLADE_TORQUE_BOUNDS.1);

    let speed = base.speed + 6.0 * noise.blade_speed - load * (4.0 + 2.0 * noise.speed_droop);

    let acoustic = base.noise + noise.acoustic + 0.5 * noise.acoustic_drift;

    let temperature = (base.temperature + 1.5 * load + 0.6 * noise.blade_temperature)
        .clamp(BLADE_TEMPERATURE_BOUNDS.0, BLADE_TEMPERATURE_BOUNDS.1);

    BladeSignals { vibration, torque, speed, noise: acoustic, temperature }
}

/// Weighted vibration/torque excess in [0, 1].
///
/// Vibration above 0.6 normalised over 2.0 (weight 0.4), torque above 20
/// normalised over 20 (weight 0.6); each term clamped to [0, 1] first.
pub fn blade_stress(signals: &BladeSignals) -> f64 {
    let vibration_excess = ((signals.vibration - 0.6) / 2.0).clamp(0.0, 1.0);
    let torque_excess = ((signals.torque - 20.0) / 20.0).clamp(0.0, 1.0);
    0.4 * vibration_excess + 0.6 * torque_excess
}

/// Higher stress consumes remaining cycles faster.
pub fn wear_rate(stress: f64) -> f64 {
    1.0 + 1.5 * stress
}

/// Remaining blade cycles: `max(1, baseline·(1 − progress) / wear_rate)`.
pub fn blade_rul(condition: BladeCondition, progress: f64, wear_rate: f64) -> f64 {
    let remaining = blade_baseline(condition).rul_cycles * (1.0 - progress) / wear_rate;
    remaining.max(RUL_MIN)
}
