//! Motor signal synthesis, coupled to the blade it drives
//!
//! - Speed: small slip model, `1500 − 0.02·(torque − 20) + N(0, 5)`
//! - Vibration: blade vibration transmitted at 0.35, +0.5 on bearing events
//! - Currents: shared load-coupled base, per-phase unbalance; an electrical
//!   event pushes phase A up and phase B down by 2 A
//! - Temperature: base current heating plus 2 °C when overheated

use crate::config::defaults::{MOTOR_CURRENT_BOUNDS, MOTOR_TEMPERATURE_BOUNDS, MOTOR_VIBRATION_BOUNDS};
use crate::simulation::SampleNoise;
use crate::types::{BladeSignals, FaultEvents, MotorSignals};

/// Synchronous-ish shaft speed at reference torque (rpm).
const NOMINAL_SPEED: f64 = 1500.0;
/// Base current at reference torque (A).
const NOMINAL_CURRENT: f64 = 10.0;
/// Blade torque at which speed and current sit at nominal (Nm).
const REFERENCE_TORQUE: f64 = 20.0;
/// Phase A/B divergence during an electrical fault (A).
const ELECTRICAL_FAULT_SHIFT: f64 = 2.0;

/// Load-coupled base current shared by all three phases.
pub fn base_current(blade_torque: f64) -> f64 {
    NOMINAL_CURRENT + 0.25 * (blade_torque - REFERENCE_TORQUE)
}

/// Overheat index: one point each for torque > 30 and motor vibration > 1.2.
pub fn overheat_index(blade_torque: f64, motor_vibration: f64) -> u8 {
    u8::from(blade_torque > 30.0) + u8::from(motor_vibration > 1.2)
}

/// Overheated when both indicators hold.
pub fn is_overheated(blade_torque: f64, motor_vibration: f64) -> bool {
    overheat_index(blade_torque, motor_vibration) >= 2
}

fn clamp_current(value: f64) -> f64 {
    value.clamp(MOTOR_CURRENT_BOUNDS.0, MOTOR_CURRENT_BOUNDS.1)
}

/// Synthesise one motor sample from the blade sample at the same index.
pub fn synthesize_motor(blade: &BladeSignals, events: FaultEvents, noise: &SampleNoise) -> MotorSignals {
    let bearing = if events.bearing { 1.0 } else { 0.0 };
    let electrical = if events.electrical { 1.0 } else { 0.0 };

    let speed = NOMINAL_SPEED - 0.02 * (blade.torque - REFERENCE_TORQUE) + 5.0 * noise.motor_speed;

    let vibration = (0.45 + 0.35 * (blade.vibration - 0.6) + 0.5 * bearing + 0.05 * noise.motor_vibration)
        .clamp(MOTOR_VIBRATION_BOUNDS.0, MOTOR_VIBRATION_BOUNDS.1);

    let i_base = base_current(blade.torque);
    let [u_a, u_b, u_c] = noise.phase_unbalance;
    let current_a = clamp_current(i_base + 0.5 * u_a + ELECTRICAL_FAULT_SHIFT * electrical);
    let current_b = clamp_current(i_base + 0.5 * u_b - ELECTRICAL_FAULT_SHIFT * electrical);
    let current_c = clamp_current(i_base + 0.5 * u_c + 0.2 * noise.phase_c_jitter);

    let overheat = is_overheated(blade.torque, vibration);
    let heat = if overheat { 2.0 } else { 0.0 };
    let temperature = (44.0 + 0.35 * (i_base - NOMINAL_CURRENT) + heat + 0.8 * noise.motor_temperature)
        .clamp(MOTOR_TEMPERATURE_BOUNDS.0, MOTOR_TEMPERATURE_BOUNDS.1);

    MotorSignals {
        current_a,
        current_b,
        current_c,
        base_current: i_base,
        vibration,
        temperature,
        speed,
        overheat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blade(vibration: f64, torque: f64) -> BladeSignals {
        BladeSignals { vibration, torque, ..Default::default() }
    }

    #[test]
    fn test_nominal_point() {
        let m = synthesize_motor(&blade(0.6, 20.0), FaultEvents::default(), &SampleNoise::default());
        assert!((m.speed - 1500.0).abs() < 1e-12);
        assert!((m.vibration - 0.45).abs() < 1e-12);
        assert!((m.base_current - 10.0).abs() < 1e-12);
        assert!((m.current_a - 10.0).abs() < 1e-12);
        assert!((m.temperature - 44.0).abs() < 1e-12);
        assert!(!m.overheat);
    }

    #[test]
    fn test_electrical_event_splits_phases_a_and_b() {
        let events = FaultEvents { bearing: false, electrical: true };
        let m = synthesize_motor(&blade(0.6, 24.0), events, &SampleNoise::default());
        assert!((m.base_current - 11.0).abs() < 1e-12);
        assert!((m.current_a - 13.0).abs() < 1e-12);
        assert!((m.current_b - 9.0).abs() < 1e-12);
        assert!((m.current_c - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_bearing_event_raises_vibration() {
        let events = FaultEvents { bearing: true, electrical: false };
        let m = synthesize_motor(&blade(0.6, 20.0), events, &SampleNoise::default());
        assert!((m.vibration - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_overheat_needs_both_indicators() {
        assert_eq!(overheat_index(35.0, 1.3), 2);
        assert!(is_overheated(35.0, 1.3));
        assert!(!is_overheated(35.0, 1.0));
        assert!(!is_overheated(25.0, 1.3));

        // torque 35 with crack-level blade vibration and a bearing event
        let events = FaultEvents { bearing: true, electrical: false };
        let m = synthesize_motor(&blade(2.4, 35.0), events, &SampleNoise::default());
        assert!(m.vibration > 1.2);
        assert!(m.overheat);
        let expected = 44.0 + 0.35 * (base_current(35.0) - 10.0) + 2.0;
        assert!((m.temperature - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_hold_under_extreme_noise() {
        let noise = SampleNoise {
            motor_vibration: 1_000.0,
            phase_unbalance: [1_000.0, -1_000.0, 1_000.0],
            motor_temperature: 1_000.0,
            ..SampleNoise::default()
        };
        let m = synthesize_motor(&blade(2.4, 60.0), FaultEvents::default(), &noise);
        assert_eq!(m.vibration, 4.0);
        assert_eq!(m.current_a, 40.0);
        assert_eq!(m.current_b, 5.0);
        assert_eq!(m.current_c, 40.0);
        assert_eq!(m.temperature, 110.0);
    }
}
