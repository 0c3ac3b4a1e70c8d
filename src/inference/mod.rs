//! Inference boundary
//!
//! Trained health/RUL models live outside this crate. This module fixes the
//! contract they are called through: the feature vector per asset kind, the
//! four model operations, and how their outputs become a `Prediction` with
//! a display severity.
//!
//! ```text
//! SensorReading ──features──> scale ──> classify ─────────────┐
//!                                  ├──> class_probabilities ──┼──> Prediction
//!                                  └──> predict_rul ──────────┘
//! ```

mod features;
mod scaler;
mod severity;

pub use features::{SensorReading, BLADE_FEATURE_COUNT, MOTOR_FEATURE_COUNT};
pub use scaler::StandardScaler;
pub use severity::{
    severity, visualization_properties, Severity, RUL_CRITICAL_HOURS, RUL_SERVICE_HOURS,
    RUL_WARNING_HOURS,
};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::AssetKind;

/// Errors at the inference boundary
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("No {0} model loaded")]
    ModelNotLoaded(AssetKind),

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model error: {0}")]
    Model(String),
}

/// A trained model for one asset kind.
pub trait AssetModel: Send + Sync {
    /// Normalize a raw feature vector.
    fn scale(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Health label for a normalized vector.
    fn classify(&self, scaled: &[f64]) -> Result<String, InferenceError>;

    /// Probability per class label for a normalized vector.
    fn class_probabilities(&self, scaled: &[f64]) -> Result<BTreeMap<String, f64>, InferenceError>;

    /// Remaining useful life in hours for a normalized vector.
    fn predict_rul(&self, scaled: &[f64]) -> Result<f64, InferenceError>;
}

/// Outcome of one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub health_status: String,
    pub rul_hours: f64,
    pub confidence_scores: BTreeMap<String, f64>,
    /// Highest class probability, 0 when the model reports none
    pub confidence: f64,
    pub color_code: String,
    pub maintenance_required: bool,
}

impl Prediction {
    fn assemble(health_status: String, rul_hours: f64, confidence_scores: BTreeMap<String, f64>) -> Self {
        let confidence = confidence_scores.values().copied().fold(0.0, f64::max);
        let (color_code, maintenance_required) = visualization_properties(&health_status, rul_hours);
        Self {
            health_status,
            rul_hours,
            confidence_scores,
            confidence,
            color_code: color_code.to_string(),
            maintenance_required,
        }
    }
}

/// Models by asset kind; either may be absent.
#[derive(Default, Clone)]
pub struct ModelRegistry {
    motor: Option<Arc<dyn AssetModel>>,
    blade: Option<Arc<dyn AssetModel>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("motor", &self.motor.is_some())
            .field("blade", &self.blade.is_some())
            .finish()
    }
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, kind: AssetKind, model: Arc<dyn AssetModel>) -> Self {
        self.set_model(kind, model);
        self
    }

    pub fn set_model(&mut self, kind: AssetKind, model: Arc<dyn AssetModel>) {
        match kind {
            AssetKind::Motor => self.motor = Some(model),
            AssetKind::Blade => self.blade = Some(model),
        }
    }

    pub fn is_loaded(&self, kind: AssetKind) -> bool {
        self.model(kind).is_ok()
    }

    fn model(&self, kind: AssetKind) -> Result<&Arc<dyn AssetModel>, InferenceError> {
        let slot = match kind {
            AssetKind::Motor => &self.motor,
            AssetKind::Blade => &self.blade,
        };
        slot.as_ref().ok_or(InferenceError::ModelNotLoaded(kind))
    }

    /// Run the model for `kind` on `reading`.
    pub fn predict(&self, kind: AssetKind, reading: &SensorReading) -> Result<Prediction, InferenceError> {
        let model = self.model(kind).inspect_err(|e| warn!(asset = %kind, "{e}"))?;

        let features: Vec<f64> = match kind {
            AssetKind::Motor => reading.motor_features().to_vec(),
            AssetKind::Blade => reading.blade_features().to_vec(),
        };

        let scaled = model.scale(&features)?;
        let label = model.classify(&scaled)?;
        let rul_hours = model.predict_rul(&scaled)?;
        let scores = model.class_probabilities(&scaled)?;

        let prediction = Prediction::assemble(label, rul_hours, scores);
        debug!(
            asset = %kind,
            status = %prediction.health_status,
            rul_hours = prediction.rul_hours,
            confidence = prediction.confidence,
            "Prediction made"
        );
        Ok(prediction)
    }
}
