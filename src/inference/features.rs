//! Sensor readings and the fixed-order feature vectors built from them

use serde::{Deserialize, Serialize};

/// Number of motor model features.
pub const MOTOR_FEATURE_COUNT: usize = 8;

/// Number of blade model features.
pub const BLADE_FEATURE_COUNT: usize = 5;

/// One live reading submitted for prediction.
///
/// Every field is optional; an absent value enters the feature vector as
/// `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default)]
    pub current_phase_a: Option<f64>,
    #[serde(default)]
    pub current_phase_b: Option<f64>,
    #[serde(default)]
    pub current_phase_c: Option<f64>,
    #[serde(default)]
    pub power_consumption: Option<f64>,
    #[serde(default)]
    pub power_factor: Option<f64>,
    #[serde(default)]
    pub vibration: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub torque: Option<f64>,
    #[serde(default)]
    pub noise: Option<f64>,
}

impl SensorReading {
    /// Phase currents A, B, C, power consumption, power factor,
    /// vibration, temperature, speed.
    pub fn motor_features(&self) -> [f64; MOTOR_FEATURE_COUNT] {
        [
            self.current_phase_a,
            self.current_phase_b,
            self.current_phase_c,
            self.power_consumption,
            self.power_factor,
            self.vibration,
            self.temperature,
            self.speed,
        ]
        .map(|v| v.unwrap_or(0.0))
    }

    /// Vibration, torque, speed, noise, temperature.
    pub fn blade_features(&self) -> [f64; BLADE_FEATURE_COUNT] {
        [self.vibration, self.torque, self.speed, self.noise, self.temperature].map(|v| v.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_become_zero() {
        let reading = SensorReading {
            current_phase_b: Some(12.5),
            speed: Some(1480.0),
            ..SensorReading::default()
        };
        assert_eq!(reading.motor_features(), [0.0, 12.5, 0.0, 0.0, 0.0, 0.0, 0.0, 1480.0]);
        assert_eq!(reading.blade_features(), [0.0, 0.0, 1480.0, 0.0, 0.0]);
    }

    #[test]
    fn test_blade_feature_order() {
        let reading = SensorReading {
            vibration: Some(0.4),
            torque: Some(22.0),
            speed: Some(300.0),
            noise: Some(71.5),
            temperature: Some(48.0),
            current_phase_a: Some(99.0),
            ..SensorReading::default()
        };
        assert_eq!(reading.blade_features(), [0.4, 22.0, 300.0, 71.5, 48.0]);
    }

    #[test]
    fn test_reading_deserializes_partial_json() {
        let reading: SensorReading = serde_json::from_str(r#"{"vibration": 0.7, "torque": 30}"#).unwrap();
        assert_eq!(reading.vibration, Some(0.7));
        assert_eq!(reading.torque, Some(30.0));
        assert_eq!(reading.noise, None);
    }
}
