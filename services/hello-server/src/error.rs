//! Error types for the hello server

/// Errors that can occur in the hello server
#[derive(Debug, thiserror::Error)]
pub enum HelloServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for hello server operations
pub type Result<T> = std::result::Result<T, HelloServerError>;
