//! Account-level commands that are not tied to a resource.

use crate::client::Client;
use crate::error::SdkResult;
use vaultwire_schema::{
    Command, FingerprintRequest, FingerprintResponse, SecretVerificationRequest, SyncRequest,
    SyncResponse, UserApiKeyResponse,
};

pub struct Platform<'a> {
    client: &'a Client,
}

impl<'a> Platform<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Human-readable fingerprint phrase for a public key.
    pub fn fingerprint(&self, fingerprint_material: &str, public_key: &str) -> SdkResult<String> {
        let response: FingerprintResponse =
            self.client.run(Command::Fingerprint(FingerprintRequest {
                fingerprint_material: fingerprint_material.to_string(),
                public_key: public_key.to_string(),
            }))?;
        Ok(response.fingerprint)
    }

    pub fn sync(&self, exclude_subdomains: Option<bool>) -> SdkResult<SyncResponse> {
        self.client
            .run(Command::Sync(SyncRequest { exclude_subdomains }))
    }

    /// The user's personal API key, after re-verifying the master password or an OTP.
    pub fn user_api_key(&self, verification: SecretVerificationRequest) -> SdkResult<String> {
        let response: UserApiKeyResponse =
            self.client.run(Command::GetUserApiKey(verification))?;
        Ok(response.api_key)
    }
}
