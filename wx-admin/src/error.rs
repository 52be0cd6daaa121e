/// Error types for the admin controller
use thiserror::Error;

/// A user intent the controller refused to act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Add-location is disabled after a service change until the new
    /// configuration has been applied
    #[error("Add location is disabled until the service configuration is applied")]
    AddLocationDisabled,

    /// The dialog markup has not been delivered by the server yet
    #[error("The add location dialog has no content yet")]
    DialogUnavailable,

    /// Confirm or lookup issued while the dialog is closed
    #[error("The add location dialog is not open")]
    DialogClosed,

    /// Row index does not belong to the last rendered table
    #[error("Row {0} does not match the current location table")]
    StaleRow(usize),
}

/// The request never completed, or completed with a non-success status.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network or protocol level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Endpoint could not be turned into an absolute URL
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}
