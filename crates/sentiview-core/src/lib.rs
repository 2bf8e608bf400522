//! Sentiview Core
//!
//! Shared types for the Sentiview sentiment front end.
//!
//! This crate provides:
//! - The model registry mapping selectable model names to hosted endpoints
//! - The inference adapter that calls the remote scoring service and ranks
//!   its per-class output
//! - Error types and result handling shared across components

pub mod error;
pub mod inference;
pub mod registry;

pub use error::{Error, Result};
pub use inference::{InferenceClient, RankedPrediction, RawScore, DEFAULT_REQUEST_TIMEOUT};
pub use registry::{ModelEntry, ModelRegistry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::inference::{InferenceClient, RankedPrediction};
    pub use crate::registry::{ModelEntry, ModelRegistry};
}
