//! Command/envelope codec.
//!
//! Commands are encoded as canonical JSON with only the populated variant's
//! key present. Envelopes are decoded in a shape-stable first pass that leaves
//! `data` as an untyped [`Value`]; typing the payload is the caller's second
//! pass and only happens once `success` has been checked.

use crate::command::Command;
use crate::envelope::ResponseEnvelope;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Result type for codec operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while encoding or decoding wire messages.
#[derive(Debug, Error)]
pub enum WireError {
    /// A command could not be serialized.
    #[error("failed to encode command: {0}")]
    Encode(#[source] serde_json::Error),

    /// Command bytes were not valid JSON or did not match any variant.
    #[error("invalid command: {0}")]
    Decode(#[source] serde_json::Error),

    /// Command JSON is not an object.
    #[error("command must be a JSON object")]
    NotAnObject,

    /// No variant populated.
    #[error("command has no populated variant")]
    EmptyCommand,

    /// More than one variant populated.
    #[error("command has more than one populated variant: {}", .0.join(", "))]
    AmbiguousCommand(Vec<String>),

    /// Response did not have the `{success, data, errorMessage}` shape.
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),
}

/// Top-level variant names the core dispatches on.
const COMMAND_NAMES: &[&str] = &[
    "accessTokenLogin",
    "passwordLogin",
    "apiKeyLogin",
    "fingerprint",
    "sync",
    "getUserApiKey",
    "generators",
    "projects",
    "secrets",
];

/// Command families whose value is itself a single-key sub-command object.
const COMMAND_FAMILIES: &[(&str, &[&str])] = &[
    ("generators", &["generatePassword", "generateSecret"]),
    ("projects", &["get", "create", "list", "update", "delete"]),
    (
        "secrets",
        &["get", "getByIds", "create", "list", "update", "delete", "sync"],
    ),
];

/// Serializes a command to its wire bytes.
pub fn encode_command(command: &Command) -> WireResult<Vec<u8>> {
    serde_json::to_vec(command).map_err(WireError::Encode)
}

/// Decodes command bytes the way the core does.
///
/// Null-valued and unknown keys are dropped at the top level and inside
/// family objects before decoding, so `{"projects": {...}, "secrets": null}`
/// and keys added by a newer core are accepted. After that exactly one known
/// variant must remain at each tagged level. Unknown fields inside request
/// objects are ignored.
pub fn decode_command(bytes: &[u8]) -> WireResult<Command> {
    let mut value: Value = serde_json::from_slice(bytes).map_err(WireError::Decode)?;
    let map = value.as_object_mut().ok_or(WireError::NotAnObject)?;

    retain_known(map, COMMAND_NAMES);
    ensure_single_key(map, None)?;

    for (family, variants) in COMMAND_FAMILIES {
        if let Some(sub) = map.get_mut(*family).and_then(Value::as_object_mut) {
            retain_known(sub, variants);
            ensure_single_key(sub, Some(*family))?;
        }
    }

    serde_json::from_value(value).map_err(WireError::Decode)
}

fn retain_known(map: &mut Map<String, Value>, known: &[&str]) {
    map.retain(|k, v| !v.is_null() && known.contains(&k.as_str()));
}

fn ensure_single_key(map: &Map<String, Value>, family: Option<&str>) -> WireResult<()> {
    match map.len() {
        0 => Err(WireError::EmptyCommand),
        1 => Ok(()),
        _ => {
            let mut keys: Vec<String> = map
                .keys()
                .map(|k| match family {
                    Some(f) => format!("{f}.{k}"),
                    None => k.clone(),
                })
                .collect();
            keys.sort();
            Err(WireError::AmbiguousCommand(keys))
        }
    }
}

/// First-pass decode of a response: validates the envelope shape and leaves
/// the payload untyped.
pub fn decode_envelope(bytes: &[u8]) -> WireResult<ResponseEnvelope<Value>> {
    serde_json::from_slice(bytes).map_err(WireError::MalformedEnvelope)
}

/// Serializes an envelope. Used on the core side of the boundary and by fakes.
pub fn encode_envelope<T: Serialize>(envelope: &ResponseEnvelope<T>) -> WireResult<String> {
    serde_json::to_string(envelope).map_err(WireError::Encode)
}
