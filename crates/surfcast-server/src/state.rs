//! Shared server state and the one-time background model load.

use std::path::Path;
use std::sync::Arc;

use surfcast_config::ServerConfig;
use surfcast_core::{Model, ModelError};
use tokio::sync::RwLock;
use tracing::{error, info};

/// Tri-state readiness of the model.
///
/// Written exactly once, by the loader task; handlers only ever read it.
/// Keeping the handle, the flag, and the error in one value means a single
/// guarded write publishes them together — a reader can never observe
/// "ready" with no model behind it.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<Model>),
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    /// The load error, if the load has failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The model handle, once ready.
    pub fn model(&self) -> Option<Arc<Model>> {
        match self {
            LoadState::Ready(model) => Some(Arc::clone(model)),
            _ => None,
        }
    }
}

pub struct AppState {
    pub config: ServerConfig,
    load: RwLock<LoadState>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            load: RwLock::new(LoadState::Loading),
        }
    }

    pub async fn load_state(&self) -> LoadState {
        self.load.read().await.clone()
    }

    /// Publishes the load outcome. Called once by the loader task.
    pub async fn publish(&self, state: LoadState) {
        *self.load.write().await = state;
    }
}

/// Kicks off the background model load and returns immediately, so request
/// serving starts without waiting on the artifact file.
pub fn spawn_model_load(state: Arc<AppState>) {
    tokio::spawn(async move {
        let path = state.config.model_path.clone();
        match load_model(&path).await {
            Ok(model) => {
                info!("Model loaded from {}", path.display());
                state.publish(LoadState::Ready(Arc::new(model))).await;
            }
            Err(e) => {
                error!("Model load failed: {}", e);
                state.publish(LoadState::Failed(e.to_string())).await;
            }
        }
    });
}

async fn load_model(path: &Path) -> Result<Model, ModelError> {
    let bytes = tokio::fs::read(path).await?;
    Model::from_slice(&bytes)
}
