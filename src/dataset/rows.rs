//! Fixed-schema rows of the three dataset tables
//!
//! Rows are projections of `SampleRecord`s: values are rounded for output
//! but never recomputed. Rounding precision per column:
//! - 3 decimals: currents, vibration, torque
//! - 2 decimals: acoustic noise, temperature
//! - 1 decimal: speed, RUL

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::types::SampleRecord;

/// Weight applied to the phase-current sum for the combined table's
/// single motor current column.
pub const COMBINED_CURRENT_WEIGHT: f64 = 0.333;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// RFC 3339, millisecond precision, `Z` suffix.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A row of one of the output tables.
pub trait TableRow: Serialize + Send + Sync {
    /// Column names, in output order
    const HEADER: &'static [&'static str];

    /// Field values rendered as text, aligned with `HEADER`
    fn fields(&self) -> Vec<String>;
}

// ============================================================================
// Motor
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotorRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "PhaseA_Current")]
    pub phase_a_current: f64,
    #[serde(rename = "PhaseB_Current")]
    pub phase_b_current: f64,
    #[serde(rename = "PhaseC_Current")]
    pub phase_c_current: f64,
    #[serde(rename = "Vibration")]
    pub vibration: f64,
    #[serde(rename = "Temp")]
    pub temperature: f64,
    #[serde(rename = "Speed")]
    pub speed: f64,
    #[serde(rename = "Health_Status")]
    pub health_status: String,
    #[serde(rename = "RUL")]
    pub rul: f64,
}

impl MotorRow {
    pub fn project(record: &SampleRecord) -> Self {
        let m = &record.motor;
        Self {
            timestamp: format_timestamp(&record.timestamp),
            phase_a_current: round_to(m.current_a, 3),
            phase_b_current: round_to(m.current_b, 3),
            phase_c_current: round_to(m.current_c, 3),
            vibration: round_to(m.vibration, 3),
            temperature: round_to(m.temperature, 2),
            speed: round_to(m.speed, 1),
            health_status: record.health.label().to_string(),
            rul: round_to(record.motor_rul, 1),
        }
    }
}

impl TableRow for MotorRow {
    const HEADER: &'static [&'static str] = &[
        "Timestamp",
        "PhaseA_Current",
        "PhaseB_Current",
        "PhaseC_Current",
        "Vibration",
        "Temp",
        "Speed",
        "Health_Status",
        "RUL",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.phase_a_current.to_string(),
            self.phase_b_current.to_string(),
            self.phase_c_current.to_string(),
            self.vibration.to_string(),
            self.temperature.to_string(),
            self.speed.to_string(),
            self.health_status.clone(),
            self.rul.to_string(),
        ]
    }
}

// ============================================================================
// Blade
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BladeRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Blade_Type")]
    pub blade_type: String,
    #[serde(rename = "Vibration")]
    pub vibration: f64,
    #[serde(rename = "Torque")]
    pub torque: f64,
    #[serde(rename = "Speed")]
    pub speed: f64,
    #[serde(rename = "Noise")]
    pub noise: f64,
    #[serde(rename = "Temp")]
    pub temperature: f64,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "RUL")]
    pub rul: f64,
}

impl BladeRow {
    pub fn project(record: &SampleRecord, blade_type: &str) -> Self {
        let b = &record.blade;
        Self {
            timestamp: format_timestamp(&record.timestamp),
            blade_type: blade_type.to_string(),
            vibration: round_to(b.vibration, 3),
            torque: round_to(b.torque, 3),
            speed: round_to(b.speed, 1),
            noise: round_to(b.noise, 2),
            temperature: round_to(b.temperature, 2),
            condition: record.condition.label().to_string(),
            rul: round_to(record.blade_rul, 1),
        }
    }
}

impl TableRow for BladeRow {
    const HEADER: &'static [&'static str] = &[
        "Timestamp",
        "Blade_Type",
        "Vibration",
        "Torque",
        "Speed",
        "Noise",
        "Temp",
        "Condition",
        "RUL",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.blade_type.clone(),
            self.vibration.to_string(),
            self.torque.to_string(),
            self.speed.to_string(),
            self.noise.to_string(),
            self.temperature.to_string(),
            self.condition.clone(),
            self.rul.to_string(),
        ]
    }
}

// ============================================================================
// Combined
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Motor_Current")]
    pub motor_current: f64,
    #[serde(rename = "Motor_Vibration")]
    pub motor_vibration: f64,
    #[serde(rename = "Motor_Temp")]
    pub motor_temperature: f64,
    #[serde(rename = "Blade_Type")]
    pub blade_type: String,
    #[serde(rename = "Blade_Vibration")]
    pub blade_vibration: f64,
    #[serde(rename = "Blade_Torque")]
    pub blade_torque: f64,
    #[serde(rename = "Blade_Speed")]
    pub blade_speed: f64,
    #[serde(rename = "Health_Status")]
    pub health_status: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "RUL_Motor")]
    pub rul_motor: f64,
    #[serde(rename = "RUL_Blade")]
    pub rul_blade: f64,
}

impl CombinedRow {
    pub fn project(record: &SampleRecord, blade_type: &str) -> Self {
        let m = &record.motor;
        let b = &record.blade;
        let current = COMBINED_CURRENT_WEIGHT * (m.current_a + m.current_b + m.current_c);
        Self {
            timestamp: format_timestamp(&record.timestamp),
            motor_current: round_to(current, 3),
            motor_vibration: round_to(m.vibration, 3),
            motor_temperature: round_to(m.temperature, 2),
            blade_type: blade_type.to_string(),
            blade_vibration: round_to(b.vibration, 3),
            blade_torque: round_to(b.torque, 3),
            blade_speed: round_to(b.speed, 1),
            health_status: record.health.label().to_string(),
            condition: record.condition.label().to_string(),
            rul_motor: round_to(record.motor_rul, 1),
            rul_blade: round_to(record.blade_rul, 1),
        }
    }
}

impl TableRow for CombinedRow {
    const HEADER: &'static [&'static str] = &[
        "Timestamp",
        "Motor_Current",
        "Motor_Vibration",
        "Motor_Temp",
        "Blade_Type",
        "Blade_Vibration",
        "Blade_Torque",
        "Blade_Speed",
        "Health_Status",
        "Condition",
        "RUL_Motor",
        "RUL_Blade",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.motor_current.to_string(),
            self.motor_vibration.to_string(),
            self.motor_temperature.to_string(),
            self.blade_type.clone(),
            self.blade_vibration.to_string(),
            self.blade_torque.to_string(),
            self.blade_speed.to_string(),
            self.health_status.clone(),
            self.condition.clone(),
            self.rul_motor.to_string(),
            self.rul_blade.to_string(),
        ]
    }
}
