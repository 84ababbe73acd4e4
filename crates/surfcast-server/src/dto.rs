use std::collections::BTreeMap;

use serde::Serialize;

/// GET / — service descriptor.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub ready: bool,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET /health — readiness plus any load error.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ready: bool,
    pub error: Option<String>,
}

/// POST /predict — success body.
#[derive(Debug, Serialize, PartialEq)]
pub struct PredictionResponse {
    pub surfer_count: i64,
    /// Per-feature contribution estimate, one entry per feature name.
    /// All zeros unless the model exposes coefficients.
    pub explanation: BTreeMap<&'static str, f64>,
}
