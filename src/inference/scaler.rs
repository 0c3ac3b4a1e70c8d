//! Standardizing feature scaler

use serde::{Deserialize, Serialize};

use super::InferenceError;

/// Per-feature standardization: `(x - mean) / scale`.
///
/// A zero or non-finite scale entry leaves the centered value unscaled, the
/// same treatment a fitted scaler gives constant features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, InferenceError> {
        if mean.len() != scale.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: mean.len(),
                actual: scale.len(),
            });
        }
        Ok(Self { mean, scale })
    }

    /// Identity scaler of `dims` features.
    pub fn identity(dims: usize) -> Self {
        Self {
            mean: vec![0.0; dims],
            scale: vec![1.0; dims],
        }
    }

    pub fn dims(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.dims() || self.scale.len() != self.dims() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.dims(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                let centered = x - mean;
                if scale.is_finite() && *scale != 0.0 {
                    centered / scale
                } else {
                    centered
                }
            })
            .collect())
    }
}
