//! System-wide default constants.
//!
//! Centralises the stock run parameters and the fixed physical tables of the
//! blade and motor models. Grouped by subsystem for easy discovery.

// ============================================================================
// Run
// ============================================================================

/// Samples in a stock run. 10 000 at 1 Hz is roughly 2.8 hours.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Seconds between samples.
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;

/// Seed of the stock run.
pub const DEFAULT_SEED: u64 = 42;

/// Samples per operating cycle. 300 at 1 Hz = 5 minutes.
pub const DEFAULT_CYCLE_LENGTH: usize = 300;

/// Leading idle share of each cycle (80% load, 20% idle).
pub const DEFAULT_IDLE_FRACTION: f64 = 0.2;

/// Where dataset files land when no directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Blade types rotated through one per operating cycle.
pub const BLADE_TYPES: [&str; 7] = [
    "Delta Form",
    "S Form",
    "4-Cut Form",
    "Krämer & Grebe 233",
    "Krämer & Grebe 423",
    "Laska M4S",
    "Seydelmann-BW",
];

// ============================================================================
// Noise
// ============================================================================

/// Guard added to the min-max range of a random walk before normalising.
pub const WALK_NORMALIZE_EPSILON: f64 = 1e-9;

// ============================================================================
// Physical bounds (inclusive)
// ============================================================================

pub const BLADE_TORQUE_BOUNDS: (f64, f64) = (5.0, 60.0);
pub const BLADE_TEMPERATURE_BOUNDS: (f64, f64) = (25.0, 90.0);
pub const MOTOR_VIBRATION_BOUNDS: (f64, f64) = (0.2, 4.0);
pub const MOTOR_CURRENT_BOUNDS: (f64, f64) = (5.0, 40.0);
pub const MOTOR_TEMPERATURE_BOUNDS: (f64, f64) = (30.0, 110.0);

/// Motor RUL ceiling; also the numerator of the decay model.
pub const MOTOR_RUL_MAX: f64 = 500.0;

/// Floor shared by blade and motor RUL.
pub const RUL_MIN: f64 = 1.0;
