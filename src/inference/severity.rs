//! Label and RUL to display severity

use serde::{Deserialize, Serialize};

/// Display severity of a prediction, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Orange,
    Yellow,
    Green,
}

impl Severity {
    pub fn color_code(&self) -> &'static str {
        match self {
            Severity::Red => "#dc3545",
            Severity::Orange => "#ff7f00",
            Severity::Yellow => "#ffc107",
            Severity::Green => "#28a745",
        }
    }

    pub fn maintenance_required(&self) -> bool {
        !matches!(self, Severity::Green)
    }
}

/// RUL below which maintenance is immediate.
pub const RUL_CRITICAL_HOURS: f64 = 24.0;
/// RUL below which maintenance must be scheduled.
pub const RUL_WARNING_HOURS: f64 = 300.0;
/// RUL below which service is due.
pub const RUL_SERVICE_HOURS: f64 = 700.0;

/// Severity for a predicted label and RUL.
///
/// Evaluated top-down, first match wins:
/// 1. `Sharp` => green (a new blade is never flagged, whatever its RUL)
/// 2. `Critical`, `Crack Detected` or RUL < 24 => red
/// 3. `Warning`, `Major Wear` or RUL < 300 => orange
/// 4. any label other than `Normal`, or RUL < 700 => yellow
/// 5. green
pub fn severity(label: &str, rul_hours: f64) -> Severity {
    match label {
        "Sharp" => Severity::Green,
        "Critical" | "Crack Detected" => Severity::Red,
        _ if rul_hours < RUL_CRITICAL_HOURS => Severity::Red,
        "Warning" | "Major Wear" => Severity::Orange,
        _ if rul_hours < RUL_WARNING_HOURS => Severity::Orange,
        _ if rul_hours < RUL_SERVICE_HOURS => Severity::Yellow,
        "Normal" => Severity::Green,
        _ => Severity::Yellow,
    }
}

/// `(color_code, maintenance_required)` for a predicted label and RUL.
pub fn visualization_properties(label: &str, rul_hours: f64) -> (&'static str, bool) {
    let level = severity(label, rul_hours);
    (level.color_code(), level.maintenance_required())
}
