//! Wire types for the vaultwire secrets core.
//!
//! This crate is the single source of truth for the JSON contract between a
//! host client and the opaque native core:
//! - [`Command`]: the closed tagged union of every request the core accepts
//! - Request/response records per command family (auth, platform, projects,
//!   secrets, generators)
//! - [`ClientSettings`]: the initialization payload
//! - [`ResponseEnvelope`]: the `{success, data, errorMessage}` wrapper
//! - The codec in [`wire`] that turns commands into bytes and bytes into envelopes
//!
//! Identifiers are opaque strings assigned by the core. Nothing here parses or
//! validates them.

mod auth;
mod command;
mod envelope;
mod generators;
mod platform;
mod projects;
mod secrets;
mod settings;
pub mod wire;

pub use auth::{
    AccessTokenLoginRequest, ApiKeyLoginRequest, CaptchaResponse, DuoProvider, EmailProvider,
    LoginResponse, PasswordLoginRequest, TwoFactorProvider, TwoFactorProviders,
    TwoFactorRequest, YubiKeyProvider,
};
pub use command::{Command, GeneratorsCommand, ProjectsCommand, SecretsCommand};
pub use envelope::ResponseEnvelope;
pub use generators::{GeneratedSecret, PasswordGeneratorRequest, SecretGeneratorRequest};
pub use platform::{
    FingerprintRequest, FingerprintResponse, ProfileOrganizationResponse, ProfileResponse,
    SecretVerificationRequest, SyncRequest, SyncResponse, UserApiKeyResponse,
};
pub use projects::{
    ProjectCreateRequest, ProjectDeleteResponse, ProjectGetRequest, ProjectPutRequest,
    ProjectResponse, ProjectsDeleteRequest, ProjectsDeleteResponse, ProjectsListRequest,
    ProjectsResponse,
};
pub use secrets::{
    SecretCreateRequest, SecretDeleteResponse, SecretGetRequest, SecretIdentifierResponse,
    SecretIdentifiersRequest, SecretIdentifiersResponse, SecretPutRequest, SecretResponse,
    SecretsDeleteRequest, SecretsDeleteResponse, SecretsGetRequest, SecretsResponse,
    SecretsSyncRequest, SecretsSyncResponse,
};
pub use settings::{
    ClientSettings, DEFAULT_API_URL, DEFAULT_IDENTITY_URL, DEFAULT_USER_AGENT, DeviceType,
};
pub use wire::{WireError, WireResult};
