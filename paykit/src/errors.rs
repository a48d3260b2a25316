use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayMindError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}

impl PayMindError {
    /// True for failures where the request never produced a usable body.
    pub fn is_transport(&self) -> bool {
        matches!(self, PayMindError::NetworkError(_) | PayMindError::DecodeError(_))
    }
}

impl From<reqwest::Error> for PayMindError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PayMindError::DecodeError(err.to_string())
        } else {
            PayMindError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PayMindError {
    fn from(err: serde_json::Error) -> Self {
        PayMindError::DecodeError(err.to_string())
    }
}

impl From<config::ConfigError> for PayMindError {
    fn from(err: config::ConfigError) -> Self {
        PayMindError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for PayMindError {
    fn from(err: std::io::Error) -> Self {
        PayMindError::StorageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PayMindError>;
