//! HTTP surface for the surfer-count prediction service.
//!
//! The model loads in the background after startup; `/predict` is gated on
//! load completion while `/` and `/health` always answer.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the service router. Middleware layers are applied by the caller.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict::predict))
        .with_state(state)
}
