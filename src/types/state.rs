//! Discrete labels: blade lifecycle state, motor health, asset kind

use serde::{Deserialize, Serialize};

// ============================================================================
// Blade Lifecycle
// ============================================================================

/// Lifecycle stage of the cutting blade.
///
/// Variants are declared in lifecycle order so the derived `Ord` matches the
/// direction of degradation: a run only ever moves forward through them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BladeCondition {
    #[default]
    #[serde(rename = "Sharp")]
    Sharp,
    #[serde(rename = "Minor Wear")]
    MinorWear,
    #[serde(rename = "Major Wear")]
    MajorWear,
    #[serde(rename = "Crack Detected")]
    CrackDetected,
}

impl BladeCondition {
    /// All conditions in lifecycle order.
    pub const ALL: [BladeCondition; 4] = [
        BladeCondition::Sharp,
        BladeCondition::MinorWear,
        BladeCondition::MajorWear,
        BladeCondition::CrackDetected,
    ];

    /// Label as written to datasets and returned by blade models
    pub fn label(&self) -> &'static str {
        match self {
            BladeCondition::Sharp => "Sharp",
            BladeCondition::MinorWear => "Minor Wear",
            BladeCondition::MajorWear => "Major Wear",
            BladeCondition::CrackDetected => "Crack Detected",
        }
    }

    /// Position in `ALL`, usable as a table index.
    pub fn index(&self) -> usize {
        match self {
            BladeCondition::Sharp => 0,
            BladeCondition::MinorWear => 1,
            BladeCondition::MajorWear => 2,
            BladeCondition::CrackDetected => 3,
        }
    }
}

impl std::fmt::Display for BladeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Motor Health
// ============================================================================

/// Rule-derived motor health label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    #[default]
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Overheating")]
    Overheating,
    #[serde(rename = "Electrical Fault")]
    ElectricalFault,
    #[serde(rename = "Bearing Fault")]
    BearingFault,
    #[serde(rename = "Load Imbalance")]
    LoadImbalance,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 5] = [
        HealthStatus::Normal,
        HealthStatus::Overheating,
        HealthStatus::ElectricalFault,
        HealthStatus::BearingFault,
        HealthStatus::LoadImbalance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Normal => "Normal",
            HealthStatus::Overheating => "Overheating",
            HealthStatus::ElectricalFault => "Electrical Fault",
            HealthStatus::BearingFault => "Bearing Fault",
            HealthStatus::LoadImbalance => "Load Imbalance",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Asset Kind
// ============================================================================

/// The two coupled asset types in a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Motor,
    Blade,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Motor => write!(f, "motor"),
            AssetKind::Blade => write!(f, "blade"),
        }
    }
}
