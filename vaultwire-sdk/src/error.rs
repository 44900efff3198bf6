//! Error types for the client.

use thiserror::Error;
use vaultwire_engine::TransportError;
use vaultwire_schema::WireError;

/// Result type for client operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Every error a client operation can return.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The call across the engine boundary did not complete.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response did not have the shape this client expects.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The core rejected the command. The message is the core's, unmodified.
    #[error("{message}")]
    Engine { message: String },

    /// The client was already closed.
    #[error("client has been closed")]
    UseAfterClose,

    /// No handle could be obtained when constructing the client.
    #[error("failed to initialize client: {0}")]
    Initialization(#[source] TransportError),
}

impl SdkError {
    /// The core's message, if the core rejected the command.
    pub fn engine_message(&self) -> Option<&str> {
        match self {
            SdkError::Engine { message } => Some(message),
            _ => None,
        }
    }
}

/// Schema skew between this client and the core.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The response is not a `{success, data, errorMessage}` object.
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// `success` was true but `data` was absent.
    #[error("successful response carried no data")]
    MissingData,

    /// `data` did not decode into the expected type.
    #[error("response payload does not match {expected}: {source}")]
    PayloadMismatch {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<WireError> for SdkError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::MalformedEnvelope(e) => ProtocolError::MalformedEnvelope(e).into(),
            other => TransportError::InvalidCommand(other.to_string()).into(),
        }
    }
}
