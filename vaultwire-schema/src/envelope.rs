//! The response envelope every core call returns.

use serde::{Deserialize, Serialize};

/// `{success, data, errorMessage}` wrapper around every core response.
///
/// `success == true` carries `data`; `success == false` carries
/// `error_message` (or, degraded, nothing at all). This envelope is the only
/// error channel the core has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Error text from the core. Populated if `success` is false.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Response payload. Populated if `success` is true.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Creates a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error_message: None,
            data: Some(data),
        }
    }

    /// Creates a failed envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            data: None,
        }
    }

    /// Builds an envelope from a core-side result.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
