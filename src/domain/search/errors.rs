use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection, timeout or body-read failure talking to the engine.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine answered with an error response.
    #[error("engine error: [{status}] {reason}")]
    Engine { status: u16, reason: String },

    /// A response or stored document could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Index create/delete was accepted but not acknowledged by the cluster.
    #[error("Not acknowledged: {0}")]
    NotAcknowledged(String),
}
