//! Physics Engine Module
//!
//! Deterministic per-sample models for the blade and the motor driving it.
//! Everything here is a pure function of one sample's inputs: no RNG, no
//! state carried between samples.
//!
//! - `synthesize_blade()` / `blade_stress()` / `blade_rul()` - blade channels and wear
//! - `synthesize_motor()` - motor channels coupled to blade torque and vibration
//! - `classify_health()` - ordered, last-wins motor health rules
//! - `motor_rul()` - motor decay model penalised by health and signal excess

pub mod blade_models;
pub mod health;
pub mod motor_models;

pub use blade_models::{blade_baseline, blade_rul, blade_stress, synthesize_blade, wear_rate, BladeBaseline};
pub use health::{classify_health, health_penalty, motor_rul, HealthRule, HealthSnapshot, HEALTH_RULES};
pub use motor_models::{base_current, is_overheated, overheat_index, synthesize_motor};
