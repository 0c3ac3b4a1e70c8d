//! Noise models and the per-run noise tape
//!
//! Two generators, both fed from a caller-supplied RNG handle:
//! - `gaussian_noise`: independent N(mean, std) draws, one per sample
//! - `smoothed_noise`: a Gaussian random walk, min-max normalised to [-1, 1]
//!
//! `NoiseTape` draws every stream a run needs, in a fixed order, before any
//! sample is synthesised. Samples then read their slice of the tape, so the
//! synthesis pass can run in parallel and still be bit-identical for a seed.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::config::defaults::WALK_NORMALIZE_EPSILON;

/// Random-walk step scale for the blade vibration drift.
const VIBRATION_DRIFT_STEP: f64 = 0.3;
/// Random-walk step scale for the acoustic noise-floor drift.
const ACOUSTIC_DRIFT_STEP: f64 = 0.4;

// ============================================================================
// Generators
// ============================================================================

/// `n` independent draws from N(mean, std_dev).
pub fn gaussian_noise<R: Rng>(rng: &mut R, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut *rng);
            mean + std_dev * z
        })
        .collect()
}

/// Slow, temporally correlated drift in [-1, 1].
///
/// Cumulative sum of N(0, scale) increments, then normalised with
/// `normalize_walk`.
pub fn smoothed_noise<R: Rng>(rng: &mut R, n: usize, scale: f64) -> Vec<f64> {
    let mut walk = gaussian_noise(rng, n, 0.0, scale);
    let mut position = 0.0;
    for step in &mut walk {
        position += *step;
        *step = position;
    }
    normalize_walk(&mut walk);
    walk
}

/// Min-max normalise in place to [0, 1], then rescale to [-1, 1].
///
/// The range gets `WALK_NORMALIZE_EPSILON` added, so a flat walk maps to -1
/// instead of dividing by zero.
pub fn normalize_walk(values: &mut [f64]) {
    if values.is_empty() {
        return;
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min + WALK_NORMALIZE_EPSILON;

    for v in values.iter_mut() {
        *v = ((*v - min) / range - 0.5) * 2.0;
    }
}

// ============================================================================
// Noise Tape
// ============================================================================

/// Random inputs of one sample.
///
/// Gaussian fields hold standard-normal draws; each model scales and shifts
/// them itself. `*_drift` fields hold smoothed-noise values in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleNoise {
    pub blade_vibration: f64,
    pub blade_vibration_drift: f64,
    pub torque_loaded: f64,
    pub torque_idle: f64,
    pub blade_speed: f64,
    pub speed_droop: f64,
    pub acoustic: f64,
    pub acoustic_drift: f64,
    pub blade_temperature: f64,
    pub motor_speed: f64,
    pub bearing_event: f64,
    pub motor_vibration: f64,
    pub electrical_event: f64,
    pub phase_unbalance: [f64; 3],
    pub phase_c_jitter: f64,
    pub motor_temperature: f64,
}

/// All random draws of a run, materialised up front.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseTape {
    samples: Vec<SampleNoise>,
}

impl NoiseTape {
    /// Draw every stream for an `n`-sample run.
    ///
    /// Streams are drawn whole, one after another, in the order blade
    /// vibration, blade torque, blade speed, acoustic noise, blade
    /// temperature, motor speed, bearing events, motor vibration, electrical
    /// events, phase currents, motor temperature. Changing this order changes
    /// every seeded dataset.
    pub fn draw<R: Rng>(rng: &mut R, n: usize) -> Self {
        let blade_vibration = gaussian_noise(rng, n, 0.0, 1.0);
        let blade_vibration_drift = smoothed_noise(rng, n, VIBRATION_DRIFT_STEP);
        let torque_loaded = gaussian_noise(rng, n, 0.0, 1.0);
        let torque_idle = gaussian_noise(rng, n, 0.0, 1.0);
        let blade_speed = gaussian_noise(rng, n, 0.0, 1.0);
        let speed_droop = gaussian_noise(rng, n, 0.0, 1.0);
        let acoustic = gaussian_noise(rng, n, 0.0, 1.0);
        let acoustic_drift = smoothed_noise(rng, n, ACOUSTIC_DRIFT_STEP);
        let blade_temperature = gaussian_noise(rng, n, 0.0, 1.0);
        let motor_speed = gaussian_noise(rng, n, 0.0, 1.0);
        let bearing_event = gaussian_noise(rng, n, 0.0, 1.0);
        let motor_vibration = gaussian_noise(rng, n, 0.0, 1.0);
        let electrical_event = gaussian_noise(rng, n, 0.0, 1.0);
        // row-major: three phases per sample
        let unbalance = gaussian_noise(rng, n * 3, 0.0, 1.0);
        let phase_c_jitter = gaussian_noise(rng, n, 0.0, 1.0);
        let motor_temperature = gaussian_noise(rng, n, 0.0, 1.0);

        let samples = (0..n)
            .map(|i| SampleNoise {
                blade_vibration: blade_vibration[i],
                blade_vibration_drift: blade_vibration_drift[i],
                torque_loaded: torque_loaded[i],
                torque_idle: torque_idle[i],
                blade_speed: blade_speed[i],
                speed_droop: speed_droop[i],
                acoustic: acoustic[i],
                acoustic_drift: acoustic_drift[i],
                blade_temperature: blade_temperature[i],
                motor_speed: motor_speed[i],
                bearing_event: bearing_event[i],
                motor_vibration: motor_vibration[i],
                electrical_event: electrical_event[i],
                phase_unbalance: [unbalance[3 * i], unbalance[3 * i + 1], unbalance[3 * i + 2]],
                phase_c_jitter: phase_c_jitter[i],
                motor_temperature: motor_temperature[i],
            })
            .collect();

        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Noise of sample `index`, if the tape covers it.
    pub fn get(&self, index: usize) -> Option<&SampleNoise> {
        self.samples.get(index)
    }

    pub fn as_slice(&self) -> &[SampleNoise] {
        &self.samples
    }
}
