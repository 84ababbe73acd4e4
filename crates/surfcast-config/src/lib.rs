//! Server configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

/// Default bind port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5001;

/// Bind address, covering all interfaces.
pub const BIND_ADDR: &str = "0.0.0.0";

/// Fixed relative path of the model artifact.
pub const MODEL_PATH: &str = "surfer_prediction_model.json";

/// Retry delay advertised while the model is still loading.
pub const RETRY_AFTER_SECONDS: u64 = 5;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Answer cold-start requests with 429 instead of 503.
    pub use_429_when_not_ready: bool,
    pub model_path: PathBuf,
    pub retry_after_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            use_429_when_not_ready: false,
            model_path: PathBuf::from(MODEL_PATH),
            retry_after_seconds: RETRY_AFTER_SECONDS,
        }
    }
}

impl ServerConfig {
    /// Reads `PORT` and `USE_429_WHEN_NOT_READY` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            use_429_when_not_ready: flag_enabled(env::var("USE_429_WHEN_NOT_READY").ok()),
            ..Self::default()
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{BIND_ADDR}:{}", self.port)
    }
}

/// Case-insensitive "true" enables the flag; anything else, or absence,
/// leaves it off.
fn flag_enabled(value: Option<String>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
