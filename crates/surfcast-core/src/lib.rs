//! Core types for the surfer-count prediction service.
//!
//! Holds the feature record passed to the model for a single prediction and
//! the model artifact itself, loaded once at startup from a JSON file.

mod features;
mod model;

pub use features::{FeatureRecord, FEATURE_NAMES};
pub use model::{BaselineModel, LinearModel, Model, ModelError};
