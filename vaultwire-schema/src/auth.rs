//! Login requests and the shared login response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Login with a machine-account access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenLoginRequest {
    pub access_token: String,
    /// Where the core persists session state between process restarts.
    /// `None` disables persistence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordLoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor: Option<TwoFactorRequest>,
}

/// Second-factor proof attached to a password login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorRequest {
    pub token: String,
    pub provider: TwoFactorProvider,
    /// Ask the server to remember this device.
    pub remember: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwoFactorProvider {
    Authenticator,
    Email,
    Duo,
    Yubikey,
    U2f,
    Remember,
    OrganizationDuo,
    WebAuthn,
}

/// Login with a personal API key. The master password is still needed to
/// unlock the account's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyLoginRequest {
    pub client_id: String,
    pub client_secret: String,
    pub password: String,
}

/// Result of any login command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub authenticated: bool,
    pub reset_master_password: bool,
    /// Whether the user is required to update their master password.
    pub force_password_reset: bool,
    /// Present when the server demands a second factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor: Option<TwoFactorProviders>,
    /// Present when the server demands a captcha (password login only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha: Option<CaptchaResponse>,
}

/// Second-factor providers offered by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorProviders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duo: Option<DuoProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yubi_key: Option<YubiKeyProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_duo: Option<DuoProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_authn: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailProvider {
    /// Obfuscated address the code was sent to.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuoProvider {
    pub host: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YubiKeyProvider {
    /// Whether the stick supports NFC.
    pub nfc: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaResponse {
    pub site_key: String,
}
