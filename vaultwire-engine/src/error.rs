//! Error types for the engine boundary.

use thiserror::Error;

/// Result type for engine boundary operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures crossing into or out of the native core.
///
/// None of these mean the core rejected a command; those come back as a
/// well-formed response with `success == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The shared library could not be opened.
    #[error("failed to load native library: {0}")]
    LibraryLoad(String),

    /// A required entry point is not exported by the library.
    #[error("native library does not export symbol: {0}")]
    MissingSymbol(String),

    /// The init entry point returned a null handle.
    #[error("native core returned a null handle")]
    NullHandle,

    /// Command bytes cannot be passed across the boundary.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The response is not valid UTF-8.
    #[error("native core returned a non UTF-8 response")]
    InvalidUtf8,

    /// The run entry point returned a null response.
    #[error("native core returned a null response")]
    NullResponse,

    /// The call was aborted before producing a response.
    #[error("call aborted: {0}")]
    Aborted(String),
}
