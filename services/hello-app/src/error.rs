//! Error types for the hello page

/// Ways a fetch attempt can fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure; the message is shown as-is
    #[error("{0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
