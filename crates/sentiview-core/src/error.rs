//! Error types for Sentiview

/// Result type alias using Sentiview's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentiview operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model name not present in the registry
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Missing or unusable API credential
    #[error("authentication configuration error: {0}")]
    AuthConfig(String),

    /// Network failure, non-success status, or malformed body from the remote endpoint
    #[error("inference request failed: {0}")]
    InferenceRequest(String),

    /// Remote service answered without any scorable classes
    #[error("remote service returned no predictions")]
    EmptyPrediction,

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new unknown-model error
    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel(name.into())
    }

    /// Create a new authentication configuration error
    pub fn auth_config(msg: impl Into<String>) -> Self {
        Self::AuthConfig(msg.into())
    }

    /// Create a new inference request error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::InferenceRequest(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::InferenceRequest(err.to_string())
    }
}
