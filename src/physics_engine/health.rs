//! Motor health classification and motor remaining-useful-life model
//!
//! Classification is per sample and stateless. The label starts at `Normal`
//! and each rule in `HEALTH_RULES` is applied in order, overwriting the label
//! whenever it matches. The last matching rule wins, which gives the
//! effective precedence (highest first):
//!
//! Load Imbalance > Bearing Fault > Electrical Fault > Overheating > Normal

use crate::config::defaults::{MOTOR_RUL_MAX, RUL_MIN};
use crate::types::{BladeSignals, FaultEvents, HealthStatus, MotorSignals};

/// Instantaneous inputs of the health rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HealthSnapshot {
    pub motor_temperature: f64,
    pub base_current: f64,
    pub motor_vibration: f64,
    pub blade_torque: f64,
    pub overheat: bool,
    pub electrical_event: bool,
}

impl HealthSnapshot {
    pub fn from_signals(blade: &BladeSignals, motor: &MotorSignals, events: FaultEvents) -> Self {
        Self {
            motor_temperature: motor.temperature,
            base_current: motor.base_current,
            motor_vibration: motor.vibration,
            blade_torque: blade.torque,
            overheat: motor.overheat,
            electrical_event: events.electrical,
        }
    }
}

/// One classification rule: the label it writes and when it fires.
pub struct HealthRule {
    pub label: HealthStatus,
    pub matches: fn(&HealthSnapshot) -> bool,
}

fn overheating(s: &HealthSnapshot) -> bool {
    s.motor_temperature > 60.0 && s.base_current > 12.0
}

fn electrical_fault(s: &HealthSnapshot) -> bool {
    s.electrical_event
}

fn bearing_fault(s: &HealthSnapshot) -> bool {
    s.motor_vibration > 1.1 && !s.overheat
}

fn load_imbalance(s: &HealthSnapshot) -> bool {
    s.blade_torque > 32.0 && s.motor_vibration > 1.2
}

/// Rules in application order. Order is significant: later rules overwrite.
pub const HEALTH_RULES: [HealthRule; 4] = [
    HealthRule { label: HealthStatus::Overheating, matches: overheating },
    HealthRule { label: HealthStatus::ElectricalFault, matches: electrical_fault },
    HealthRule { label: HealthStatus::BearingFault, matches: bearing_fault },
    HealthRule { label: HealthStatus::LoadImbalance, matches: load_imbalance },
];

/// Apply every rule in order; the last match wins.
pub fn classify_health(snapshot: &HealthSnapshot) -> HealthStatus {
    HEALTH_RULES.iter().fold(HealthStatus::Normal, |label, rule| {
        if (rule.matches)(snapshot) {
            rule.label
        } else {
            label
        }
    })
}

/// RUL penalty attached to each health label.
pub fn health_penalty(status: HealthStatus) -> f64 {
    match status {
        HealthStatus::Normal => 0.2,
        HealthStatus::BearingFault => 0.8,
        HealthStatus::ElectricalFault => 1.2,
        HealthStatus::Overheating => 1.5,
        HealthStatus::LoadImbalance => 1.8,
    }
}

/// Remaining motor life, in [1, 500].
///
/// `500·(1 − progress) / (1 + penalty + 0.5·clamp(vib − 0.5, 0, 2)
///  + 0.3·clamp((temp − 45) / 30, 0, 2))`
pub fn motor_rul(progress: f64, status: HealthStatus, vibration: f64, temperature: f64) -> f64 {
    let vibration_term = 0.5 * (vibration - 0.5).clamp(0.0, 2.0);
    let thermal_term = 0.3 * ((temperature - 45.0) / 30.0).clamp(0.0, 2.0);
    let divisor = 1.0 + health_penalty(status) + vibration_term + thermal_term;
    (MOTOR_RUL_MAX * (1.0 - progress) / divisor).clamp(RUL_MIN, MOTOR_RUL_MAX)
}
