//! Dataset assembly and output
//!
//! Projects a finished `SimulationRun` into three fixed-schema tables
//! (motor, blade, combined) and writes them for the persistence side.
//! Assembly is pure projection and formatting; no signal is recomputed.

mod rows;
mod writer;

pub use rows::{
    format_timestamp, round_to, BladeRow, CombinedRow, MotorRow, TableRow, COMBINED_CURRENT_WEIGHT,
};
pub use writer::{write_table, DatasetPaths, DatasetWriter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simulation::SimulationRun;

/// Errors writing dataset tables
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One of the three output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Motor,
    Blade,
    Combined,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Motor, TableKind::Blade, TableKind::Combined];

    /// File name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            TableKind::Motor => "motor_dataset_realistic",
            TableKind::Blade => "blade_dataset_realistic",
            TableKind::Combined => "combined_dataset_realistic",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Motor => write!(f, "motor"),
            TableKind::Blade => write!(f, "blade"),
            TableKind::Combined => write!(f, "combined"),
        }
    }
}

impl std::str::FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "motor" => Ok(Self::Motor),
            "blade" => Ok(Self::Blade),
            "combined" => Ok(Self::Combined),
            other => Err(format!("unknown table '{other}' (expected motor, blade or combined)")),
        }
    }
}

/// The three tables of a run, rows in ascending time order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tables {
    pub motor: Vec<MotorRow>,
    pub blade: Vec<BladeRow>,
    pub combined: Vec<CombinedRow>,
}

impl Tables {
    pub fn len(&self) -> usize {
        self.motor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motor.is_empty()
    }
}

/// Project a run into its three tables.
///
/// The projections share nothing mutable, so they run concurrently.
pub fn assemble(run: &SimulationRun) -> Tables {
    let ((motor, blade), combined) = rayon::join(
        || {
            rayon::join(
                || run.records.iter().map(MotorRow::project).collect(),
                || {
                    run.records
                        .iter()
                        .map(|r| BladeRow::project(r, run.blade_type_name(r)))
                        .collect()
                },
            )
        },
        || {
            run.records
                .iter()
                .map(|r| CombinedRow::project(r, run.blade_type_name(r)))
                .collect()
        },
    );

    Tables { motor, blade, combined }
}
