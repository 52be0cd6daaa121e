/// Error types for the wire protocol
use thiserror::Error;

/// Failure to turn a response body into an [`crate::Outcome`].
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Body is not a JSON object of the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Action name is not part of the catalog
    #[error("Unknown action \"{0}\"")]
    UnknownAction(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
