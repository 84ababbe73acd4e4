//! The prediction engine: threshold gate, model invocation, attribution.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use surfcast_core::{FeatureRecord, Model, FEATURE_NAMES};

use crate::dto::PredictionResponse;
use crate::error::ApiError;

/// Fields a prediction request must carry. `weather_condition` is optional.
pub const REQUIRED_FIELDS: [&str; 4] = ["hour", "water_temp", "air_temp", "water_level"];

/// Water level below which nobody surfs. A domain rule: the model is never
/// invoked under this threshold.
const WATER_LEVEL_THRESHOLD: f64 = 130.0;

/// Checks presence of every required field, reporting all missing names in
/// the order given. Presence only; type errors surface later as 500s.
pub fn require_fields(
    data: &Map<String, Value>,
    fields: &[&'static str],
) -> Result<(), ApiError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .copied()
        .filter(|f| !data.contains_key(*f))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::MissingFields(missing))
    }
}

/// Runs one prediction over a validated request body.
pub fn run(model: &Model, data: &Map<String, Value>) -> Result<PredictionResponse, ApiError> {
    run_inner(model, data).map_err(ApiError::Prediction)
}

fn run_inner(model: &Model, data: &Map<String, Value>) -> Result<PredictionResponse, String> {
    let water_level = numeric(data, "water_level")?;

    let mut surfer_count = 0i64;
    let mut explanation: BTreeMap<&'static str, f64> =
        FEATURE_NAMES.iter().map(|name| (*name, 0.0)).collect();

    if water_level >= WATER_LEVEL_THRESHOLD {
        let record = feature_record(data)?;
        let raw = model.predict(&record).map_err(|e| e.to_string())?;
        // Truncate toward zero, then clamp: 3.7 surfers means 3, never -1.
        surfer_count = (raw as i64).max(0);

        if let Some(coefficients) = model.coefficients() {
            let values = record.values();
            for ((name, coef), value) in FEATURE_NAMES.iter().copied().zip(coefficients).zip(values)
            {
                explanation.insert(name, coef * value);
            }
        }
    }

    Ok(PredictionResponse {
        surfer_count,
        explanation,
    })
}

fn feature_record(data: &Map<String, Value>) -> Result<FeatureRecord, String> {
    Ok(FeatureRecord {
        hour: numeric(data, "hour")?,
        water_temp: numeric(data, "water_temp")?,
        air_temp: numeric(data, "air_temp")?,
        water_level: numeric(data, "water_level")?,
        weather_condition: optional_numeric(data, "weather_condition")?,
    })
}

fn numeric(data: &Map<String, Value>, field: &str) -> Result<f64, String> {
    data.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| format!("field '{field}' is not numeric"))
}

fn optional_numeric(data: &Map<String, Value>, field: &str) -> Result<Option<f64>, String> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("field '{field}' is not numeric")),
    }
}
