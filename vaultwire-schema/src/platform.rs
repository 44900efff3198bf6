//! Account-level commands: fingerprint, vault sync and API key retrieval.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintRequest {
    /// Input material for the fingerprint derivation.
    pub fingerprint_material: String,
    /// The user's public key, base64 encoded.
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintResponse {
    pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_subdomains: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub profile: ProfileResponse,
    /// Vault items, passed through untouched.
    #[serde(default)]
    pub ciphers: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organizations: Vec<ProfileOrganizationResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOrganizationResponse {
    pub id: String,
}

/// Proof of identity for sensitive account operations. Exactly one of the two
/// fields is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretVerificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApiKeyResponse {
    pub api_key: String,
}
