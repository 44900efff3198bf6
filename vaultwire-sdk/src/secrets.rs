//! Secret operations.

use crate::client::Client;
use crate::error::SdkResult;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use vaultwire_schema::{
    SecretCreateRequest, SecretDeleteResponse, SecretGetRequest,
    SecretIdentifierResponse, SecretIdentifiersRequest, SecretIdentifiersResponse,
    SecretPutRequest, SecretResponse, SecretsCommand, SecretsDeleteRequest, SecretsDeleteResponse,
    SecretsGetRequest, SecretsResponse, SecretsSyncRequest, SecretsSyncResponse,
};

/// Fields of a secret being created or updated.
///
/// `note` defaults to empty, which the core accepts where a missing note is
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretInput {
    pub key: String,
    pub value: String,
    pub note: String,
    pub project_ids: Option<Vec<String>>,
}

impl SecretInput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_projects<I, S>(mut self, project_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project_ids = Some(project_ids.into_iter().map(Into::into).collect());
        self
    }
}

/// Secret operations on a [`Client`].
pub struct Secrets<'a> {
    client: &'a Client,
}

impl<'a> Secrets<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn get(&self, id: &str) -> SdkResult<SecretResponse> {
        self.run(SecretsCommand::Get(SecretGetRequest { id: id.to_string() }))
    }

    pub fn get_by_ids<I, S>(&self, ids: I) -> SdkResult<Vec<SecretResponse>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let response: SecretsResponse = self.run(SecretsCommand::GetByIds(SecretsGetRequest {
            ids: ids.into_iter().map(Into::into).collect(),
        }))?;
        Ok(response.data)
    }

    pub fn create(&self, organization_id: &str, input: SecretInput) -> SdkResult<SecretResponse> {
        self.run(SecretsCommand::Create(SecretCreateRequest {
            organization_id: organization_id.to_string(),
            key: input.key,
            value: input.value,
            note: input.note,
            project_ids: input.project_ids,
        }))
    }

    /// Identifiers of the secrets in an organization. Values are not included.
    pub fn list(&self, organization_id: &str) -> SdkResult<Vec<SecretIdentifierResponse>> {
        let response: SecretIdentifiersResponse =
            self.run(SecretsCommand::List(SecretIdentifiersRequest {
                organization_id: organization_id.to_string(),
            }))?;
        Ok(response.data)
    }

    pub fn update(
        &self,
        id: &str,
        organization_id: &str,
        input: SecretInput,
    ) -> SdkResult<SecretResponse> {
        self.run(SecretsCommand::Update(SecretPutRequest {
            id: id.to_string(),
            organization_id: organization_id.to_string(),
            key: input.key,
            value: input.value,
            note: input.note,
            project_ids: input.project_ids,
        }))
    }

    /// Deletes secrets, reporting failures per item.
    pub fn delete<I, S>(&self, ids: I) -> SdkResult<Vec<SecretDeleteResponse>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let response: SecretsDeleteResponse =
            self.run(SecretsCommand::Delete(SecretsDeleteRequest {
                ids: ids.into_iter().map(Into::into).collect(),
            }))?;
        Ok(response.data)
    }

    /// Secrets changed since `last_synced`, or all of them when `None`.
    pub fn sync(
        &self,
        organization_id: &str,
        last_synced: Option<DateTime<Utc>>,
    ) -> SdkResult<SecretsSyncResponse> {
        self.run(SecretsCommand::Sync(SecretsSyncRequest {
            organization_id: organization_id.to_string(),
            last_synced_date: last_synced,
        }))
    }

    fn run<T: DeserializeOwned>(&self, command: SecretsCommand) -> SdkResult<T> {
        self.client.run(command.into())
    }
}
