//! HTTP route handlers for the prediction service.

pub mod predict;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, ServiceInfo};
use crate::state::AppState;

/// GET / — static descriptor plus live readiness. Always 200.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    let load = state.load_state().await;
    Json(ServiceInfo {
        service: "Surfer prediction API",
        ready: load.is_ready(),
        endpoints: BTreeMap::from([
            ("GET /health", "readiness + load error if any"),
            ("POST /predict", "make a prediction (JSON body)"),
        ]),
    })
}

/// GET /health — always 200, even when the load failed; only `/predict`
/// is gated on readiness.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let load = state.load_state().await;
    Json(HealthResponse {
        ready: load.is_ready(),
        error: load.error().map(str::to_string),
    })
}
