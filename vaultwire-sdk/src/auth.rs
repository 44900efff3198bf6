//! Login commands.

use crate::client::Client;
use crate::error::SdkResult;
use std::path::Path;
use tracing::info;
use vaultwire_schema::{
    AccessTokenLoginRequest, ApiKeyLoginRequest, Command, LoginResponse, PasswordLoginRequest,
    TwoFactorRequest,
};

/// Login operations on a [`Client`].
///
/// A login that reports `authenticated` moves the client to
/// [`ClientState::Authenticated`](crate::ClientState::Authenticated).
/// Anything else (second factor required, captcha) leaves it where it was.
pub struct Auth<'a> {
    client: &'a Client,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Logs in with a machine account access token. With a `state_file` the
    /// core persists the session there and reuses it on the next login.
    pub fn login_access_token(
        &self,
        access_token: &str,
        state_file: Option<&Path>,
    ) -> SdkResult<LoginResponse> {
        self.login(Command::AccessTokenLogin(AccessTokenLoginRequest {
            access_token: access_token.to_string(),
            state_file: state_file.map(Path::to_path_buf),
        }))
    }

    pub fn login_password(
        &self,
        email: &str,
        password: &str,
        two_factor: Option<TwoFactorRequest>,
    ) -> SdkResult<LoginResponse> {
        self.login(Command::PasswordLogin(PasswordLoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            two_factor,
        }))
    }

    pub fn login_api_key(
        &self,
        client_id: &str,
        client_secret: &str,
        password: &str,
    ) -> SdkResult<LoginResponse> {
        self.login(Command::ApiKeyLogin(ApiKeyLoginRequest {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            password: password.to_string(),
        }))
    }

    fn login(&self, command: Command) -> SdkResult<LoginResponse> {
        let name = command.name();
        let response: LoginResponse = self.client.run(command)?;
        if response.authenticated {
            self.client.mark_authenticated();
            info!(method = name, "login succeeded");
        } else {
            info!(
                method = name,
                two_factor = response.two_factor.is_some(),
                captcha = response.captcha.is_some(),
                "login needs further steps"
            );
        }
        Ok(response)
    }
}
