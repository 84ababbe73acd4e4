//! The pre-trained model artifact and its prediction math.

use serde::{Deserialize, Serialize};

use crate::features::{FeatureRecord, FEATURE_NAMES};

/// Errors from loading or invoking the model artifact.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error("hour must be an integer in 0..24, got {0}")]
    HourOutOfRange(f64),

    #[error("model produced a non-finite prediction")]
    NonFinite,
}

/// A pre-trained model, tagged by kind in the artifact file.
///
/// The variant decides the explanation path at compile time: only `Linear`
/// exposes per-feature coefficients, so only it yields a non-zero
/// explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    Linear(LinearModel),
    HourlyBaseline(BaselineModel),
}

/// Linear regression over the five features, in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub weights: Vec<f64>,
}

/// Average surfer count per hour of day, 24 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineModel {
    pub counts: Vec<f64>,
}

impl Model {
    /// Parses and validates an artifact from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let model: Model = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Model::Linear(m) if m.weights.len() != FEATURE_NAMES.len() => {
                Err(ModelError::Invalid(format!(
                    "expected {} weights, got {}",
                    FEATURE_NAMES.len(),
                    m.weights.len()
                )))
            }
            Model::HourlyBaseline(m) if m.counts.len() != 24 => Err(ModelError::Invalid(
                format!("expected 24 hourly counts, got {}", m.counts.len()),
            )),
            _ => Ok(()),
        }
    }

    /// Predicts the raw (unclamped) surfer count for one feature record.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let raw = match self {
            Model::Linear(m) => {
                let values = record.values();
                m.intercept
                    + m.weights
                        .iter()
                        .zip(values)
                        .map(|(weight, value)| weight * value)
                        .sum::<f64>()
            }
            Model::HourlyBaseline(m) => {
                let hour = record.hour;
                if hour.fract() != 0.0 || !(0.0..24.0).contains(&hour) {
                    return Err(ModelError::HourOutOfRange(hour));
                }
                m.counts[hour as usize]
            }
        };

        if !raw.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(raw)
    }

    /// Per-feature coefficients, aligned to [`FEATURE_NAMES`], when the
    /// model kind has them.
    pub fn coefficients(&self) -> Option<&[f64]> {
        match self {
            Model::Linear(m) => Some(&m.weights),
            Model::HourlyBaseline(_) => None,
        }
    }
}
