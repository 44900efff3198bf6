//! Password and secret generator options.
//!
//! The `min_*` fields are tri-state on the wire: `None` omits the key entirely,
//! `Some(0)` sends an explicit zero. The core treats the two differently, so
//! they must never be collapsed into a default.

use serde::{Deserialize, Serialize};

const DEFAULT_PASSWORD_LENGTH: u8 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGeneratorRequest {
    /// Include lowercase characters (a-z).
    pub lowercase: bool,
    /// Include uppercase characters (A-Z).
    pub uppercase: bool,
    /// Include numbers (0-9).
    pub numbers: bool,
    /// Include special characters: ! @ # $ % ^ & *
    pub special: bool,
    /// Must be greater than the sum of all minimums.
    pub length: u8,
    /// Exclude I, O, l, 0 and 1.
    pub avoid_ambiguous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lowercase: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_uppercase: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_number: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_special: Option<u8>,
}

impl Default for PasswordGeneratorRequest {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            special: false,
            length: DEFAULT_PASSWORD_LENGTH,
            avoid_ambiguous: false,
            min_lowercase: None,
            min_uppercase: None,
            min_number: None,
            min_special: None,
        }
    }
}

/// Options for machine secrets. Same character classes as passwords, named
/// the way the secrets API names them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretGeneratorRequest {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub length: u8,
    pub avoid_ambiguous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lowercase: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_uppercase: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_number: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_special: Option<u8>,
}

impl Default for SecretGeneratorRequest {
    fn default() -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_special: false,
            length: DEFAULT_PASSWORD_LENGTH,
            avoid_ambiguous: false,
            min_lowercase: None,
            min_uppercase: None,
            min_number: None,
            min_special: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSecret {
    pub secret: String,
}
