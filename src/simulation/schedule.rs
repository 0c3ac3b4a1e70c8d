//! Operating-cycle schedule, blade lifecycle and blade type rotation
//!
//! All three are pure functions of the sample index (or of progress), so any
//! sample can be evaluated without looking at its neighbours.

use crate::config::{CycleConfig, DegradationConfig};
use crate::types::BladeCondition;

// ============================================================================
// Operating Cycle
// ============================================================================

/// Repeating idle/load window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingCycle {
    length: usize,
    idle_fraction: f64,
}

impl OperatingCycle {
    /// `length` must be at least 1; config validation rejects 0. Release
    /// builds treat a zero length as 1.
    pub fn new(length: usize, idle_fraction: f64) -> Self {
        debug_assert!(length > 0, "operating cycle length must be at least 1");
        Self { length: length.max(1), idle_fraction }
    }

    pub fn from_config(config: &CycleConfig) -> Self {
        Self::new(config.length, config.idle_fraction)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Completed cycles before `index`.
    pub fn cycle_index(&self, index: usize) -> usize {
        index / self.length
    }

    /// True ("load") once the position inside the cycle passes the idle share.
    pub fn is_loaded(&self, index: usize) -> bool {
        (index % self.length) as f64 > self.length as f64 * self.idle_fraction
    }

    /// Blade type for `index`: one type per cycle, wrapping around the list.
    pub fn blade_type_index(&self, index: usize, type_count: usize) -> usize {
        if type_count == 0 {
            return 0;
        }
        self.cycle_index(index) % type_count
    }
}

// ============================================================================
// Degradation State Machine
// ============================================================================

/// Progress thresholds of the blade lifecycle.
///
/// Thresholds are strictly increasing (enforced by config validation), so the
/// condition is non-decreasing in progress and a run visits each state in
/// order without ever regressing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationSchedule {
    minor_wear_at: f64,
    major_wear_at: f64,
    crack_at: f64,
}

impl DegradationSchedule {
    pub fn from_config(config: &DegradationConfig) -> Self {
        Self {
            minor_wear_at: config.minor_wear_at,
            major_wear_at: config.major_wear_at,
            crack_at: config.crack_at,
        }
    }

    pub fn condition_at(&self, progress: f64) -> BladeCondition {
        match progress {
            p if p < self.minor_wear_at => BladeCondition::Sharp,
            p if p < self.major_wear_at => BladeCondition::MinorWear,
            p if p < self.crack_at => BladeCondition::MajorWear,
            _ => BladeCondition::CrackDetected,
        }
    }
}

impl Default for DegradationSchedule {
    fn default() -> Self {
        Self::from_config(&DegradationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "operating cycle length must be at least 1")]
    fn test_zero_length_cycle_is_rejected_in_debug() {
        let _ = OperatingCycle::new(0, 0.2);
    }

    #[test]
    fn test_cycle_boundary_arithmetic() {
        // length 5, 20% idle: position 0 and 1 are idle (1 is not > 1.0)
        let cycle = OperatingCycle::new(5, 0.2);
        let loaded: Vec<bool> = (0..10).map(|i| cycle.is_loaded(i)).collect();
        assert_eq!(
            loaded,
            vec![false, false, true, true, true, false, false, true, true, true]
        );
    }

    #[test]
    fn test_stock_cycle_is_mostly_loaded() {
        let cycle = OperatingCycle::new(300, 0.2);
        let loaded = (0..300).filter(|&i| cycle.is_loaded(i)).count();
        assert_eq!(loaded, 239);
        assert!(!cycle.is_loaded(0));
        assert!(!cycle.is_loaded(60));
        assert!(cycle.is_loaded(61));
        assert!(cycle.is_loaded(299));
        assert!(!cycle.is_loaded(300));
    }

    #[test]
    fn test_blade_type_rotation() {
        let cycle = OperatingCycle::new(300, 0.2);
        assert_eq!(cycle.blade_type_index(650, 7), 2);
        assert_eq!(cycle.blade_type_index(299, 7), 0);
        assert_eq!(cycle.blade_type_index(300 * 7, 7), 0);
        assert_eq!(cycle.blade_type_index(300 * 8 + 1, 7), 1);
    }

    #[test]
    fn test_condition_thresholds() {
        let schedule = DegradationSchedule::default();
        assert_eq!(schedule.condition_at(0.0), BladeCondition::Sharp);
        assert_eq!(schedule.condition_at(0.4999), BladeCondition::Sharp);
        assert_eq!(schedule.condition_at(0.5), BladeCondition::MinorWear);
        assert_eq!(schedule.condition_at(0.8), BladeCondition::MajorWear);
        assert_eq!(schedule.condition_at(0.95), BladeCondition::CrackDetected);
        assert_eq!(schedule.condition_at(1.0), BladeCondition::CrackDetected);
    }

    #[test]
    fn test_condition_never_regresses() {
        let schedule = DegradationSchedule::default();
        let n = 1_000;
        let mut previous = BladeCondition::Sharp;
        for i in 0..n {
            let c = schedule.condition_at(i as f64 / (n - 1) as f64);
            assert!(c >= previous, "regressed at {i}: {previous} -> {c}");
            previous = c;
        }
        assert_eq!(previous, BladeCondition::CrackDetected);
    }
}
