//! The command tagged union.
//!
//! The core dispatches on key presence, so every command serializes to a JSON
//! object with exactly one top-level key, e.g. `{"projects":{"get":{"id":"…"}}}`.
//! Modelling it as an enum makes "zero or several variants populated"
//! unrepresentable.

use crate::auth::{AccessTokenLoginRequest, ApiKeyLoginRequest, PasswordLoginRequest};
use crate::generators::{PasswordGeneratorRequest, SecretGeneratorRequest};
use crate::platform::{FingerprintRequest, SecretVerificationRequest, SyncRequest};
use crate::projects::{
    ProjectCreateRequest, ProjectGetRequest, ProjectPutRequest, ProjectsDeleteRequest,
    ProjectsListRequest,
};
use crate::secrets::{
    SecretCreateRequest, SecretGetRequest, SecretIdentifiersRequest, SecretPutRequest,
    SecretsDeleteRequest, SecretsGetRequest, SecretsSyncRequest,
};
use serde::{Deserialize, Serialize};

/// A single request to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Login with a machine-account access token.
    ///
    /// Returns: [`LoginResponse`](crate::LoginResponse)
    AccessTokenLogin(AccessTokenLoginRequest),

    /// Login with email and master password. Cannot complete a 2FA or captcha
    /// challenge on its own.
    ///
    /// Returns: [`LoginResponse`](crate::LoginResponse)
    PasswordLogin(PasswordLoginRequest),

    /// Login with a personal API key.
    ///
    /// Returns: [`LoginResponse`](crate::LoginResponse)
    ApiKeyLogin(ApiKeyLoginRequest),

    /// Returns: [`FingerprintResponse`](crate::FingerprintResponse)
    Fingerprint(FingerprintRequest),

    /// > Requires authentication
    ///
    /// Returns: [`SyncResponse`](crate::SyncResponse)
    Sync(SyncRequest),

    /// > Requires authentication
    ///
    /// Returns: [`UserApiKeyResponse`](crate::UserApiKeyResponse)
    GetUserApiKey(SecretVerificationRequest),

    Generators(GeneratorsCommand),
    Projects(ProjectsCommand),
    Secrets(SecretsCommand),
}

/// Generator commands. These run locally inside the core and need no login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneratorsCommand {
    /// Returns: `String`
    GeneratePassword(PasswordGeneratorRequest),
    /// Returns: [`GeneratedSecret`](crate::GeneratedSecret)
    GenerateSecret(SecretGeneratorRequest),
}

/// Project commands. All of them require authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectsCommand {
    /// Returns: [`ProjectResponse`](crate::ProjectResponse)
    Get(ProjectGetRequest),
    /// Returns: [`ProjectResponse`](crate::ProjectResponse)
    Create(ProjectCreateRequest),
    /// Returns: [`ProjectsResponse`](crate::ProjectsResponse)
    List(ProjectsListRequest),
    /// Returns: [`ProjectResponse`](crate::ProjectResponse)
    Update(ProjectPutRequest),
    /// Returns: [`ProjectsDeleteResponse`](crate::ProjectsDeleteResponse)
    Delete(ProjectsDeleteRequest),
}

/// Secret commands. All of them require authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecretsCommand {
    /// Returns: [`SecretResponse`](crate::SecretResponse)
    Get(SecretGetRequest),
    /// Returns: [`SecretsResponse`](crate::SecretsResponse)
    GetByIds(SecretsGetRequest),
    /// Returns: [`SecretResponse`](crate::SecretResponse)
    Create(SecretCreateRequest),
    /// Lists identifiers only; fetch values with `Get` or `GetByIds`.
    ///
    /// Returns: [`SecretIdentifiersResponse`](crate::SecretIdentifiersResponse)
    List(SecretIdentifiersRequest),
    /// Returns: [`SecretResponse`](crate::SecretResponse)
    Update(SecretPutRequest),
    /// Returns: [`SecretsDeleteResponse`](crate::SecretsDeleteResponse)
    Delete(SecretsDeleteRequest),
    /// Requires an access-token login.
    ///
    /// Returns: [`SecretsSyncResponse`](crate::SecretsSyncResponse)
    Sync(SecretsSyncRequest),
}

impl Command {
    /// Dotted name of the populated variant, e.g. `projects.create`.
    ///
    /// Used for logging; never includes request fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccessTokenLogin(_) => "accessTokenLogin",
            Self::PasswordLogin(_) => "passwordLogin",
            Self::ApiKeyLogin(_) => "apiKeyLogin",
            Self::Fingerprint(_) => "fingerprint",
            Self::Sync(_) => "sync",
            Self::GetUserApiKey(_) => "getUserApiKey",
            Self::Generators(cmd) => match cmd {
                GeneratorsCommand::GeneratePassword(_) => "generators.generatePassword",
                GeneratorsCommand::GenerateSecret(_) => "generators.generateSecret",
            },
            Self::Projects(cmd) => match cmd {
                ProjectsCommand::Get(_) => "projects.get",
                ProjectsCommand::Create(_) => "projects.create",
                ProjectsCommand::List(_) => "projects.list",
                ProjectsCommand::Update(_) => "projects.update",
                ProjectsCommand::Delete(_) => "projects.delete",
            },
            Self::Secrets(cmd) => match cmd {
                SecretsCommand::Get(_) => "secrets.get",
                SecretsCommand::GetByIds(_) => "secrets.getByIds",
                SecretsCommand::Create(_) => "secrets.create",
                SecretsCommand::List(_) => "secrets.list",
                SecretsCommand::Update(_) => "secrets.update",
                SecretsCommand::Delete(_) => "secrets.delete",
                SecretsCommand::Sync(_) => "secrets.sync",
            },
        }
    }

    /// Whether the command starts or replaces an authenticated session.
    pub fn is_login(&self) -> bool {
        matches!(
            self,
            Self::AccessTokenLogin(_) | Self::PasswordLogin(_) | Self::ApiKeyLogin(_)
        )
    }
}

impl From<ProjectsCommand> for Command {
    fn from(cmd: ProjectsCommand) -> Self {
        Self::Projects(cmd)
    }
}

impl From<SecretsCommand> for Command {
    fn from(cmd: SecretsCommand) -> Self {
        Self::Secrets(cmd)
    }
}

impl From<GeneratorsCommand> for Command {
    fn from(cmd: GeneratorsCommand) -> Self {
        Self::Generators(cmd)
    }
}
