//! Two-phase response unwrapping.

use crate::error::{ProtocolError, SdkError, SdkResult};
use serde::de::DeserializeOwned;
use vaultwire_schema::wire::decode_envelope;

/// Message used when the core fails without saying why.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Unwraps a raw response into `T`.
///
/// The envelope is decoded first and `success` checked before `data` is
/// looked at, so a failed call always surfaces the core's message even when
/// the payload is garbage.
pub fn unwrap_response<T: DeserializeOwned>(raw: &str) -> SdkResult<T> {
    let envelope = decode_envelope(raw.as_bytes())?;

    if !envelope.success {
        return Err(SdkError::Engine {
            message: envelope
                .error_message
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        });
    }

    let data = envelope.data.ok_or(ProtocolError::MissingData)?;
    serde_json::from_value(data).map_err(|source| {
        ProtocolError::PayloadMismatch {
            expected: std::any::type_name::<T>(),
            source,
        }
        .into()
    })
}
