//! POST /predict — the readiness-gated prediction endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};
use tracing::warn;

use crate::dto::PredictionResponse;
use crate::error::ApiError;
use crate::services::predict as engine;
use crate::state::AppState;

/// Gate on readiness, validate required fields, then run the engine.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Some(model) = state.load_state().await.model() else {
        return Err(ApiError::NotReady {
            use_429: state.config.use_429_when_not_ready,
            retry_after_seconds: state.config.retry_after_seconds,
        });
    };

    // An absent or unparsable body behaves as an empty object, which then
    // fails validation naming every required field.
    let data: Map<String, Value> = match serde_json::from_slice(&body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    engine::require_fields(&data, &engine::REQUIRED_FIELDS)?;

    let response = engine::run(&model, &data).map_err(|e| {
        warn!("Prediction failed: {:?}", e);
        e
    })?;
    Ok(Json(response))
}
