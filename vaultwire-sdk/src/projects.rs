//! Project operations.

use crate::client::Client;
use crate::error::SdkResult;
use vaultwire_schema::{
    ProjectCreateRequest, ProjectDeleteResponse, ProjectGetRequest, ProjectPutRequest,
    ProjectResponse, ProjectsCommand, ProjectsDeleteRequest, ProjectsDeleteResponse,
    ProjectsListRequest, ProjectsResponse,
};

/// Project operations on a [`Client`]. Identifiers are passed to the core as is.
pub struct Projects<'a> {
    client: &'a Client,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn get(&self, id: &str) -> SdkResult<ProjectResponse> {
        self.run(ProjectsCommand::Get(ProjectGetRequest { id: id.to_string() }))
    }

    pub fn create(&self, organization_id: &str, name: &str) -> SdkResult<ProjectResponse> {
        self.run(ProjectsCommand::Create(ProjectCreateRequest {
            organization_id: organization_id.to_string(),
            name: name.to_string(),
        }))
    }

    /// Projects in the organization, in whatever order the core returns them.
    pub fn list(&self, organization_id: &str) -> SdkResult<Vec<ProjectResponse>> {
        let response: ProjectsResponse = self.run(ProjectsCommand::List(ProjectsListRequest {
            organization_id: organization_id.to_string(),
        }))?;
        Ok(response.data)
    }

    pub fn update(
        &self,
        id: &str,
        organization_id: &str,
        name: &str,
    ) -> SdkResult<ProjectResponse> {
        self.run(ProjectsCommand::Update(ProjectPutRequest {
            id: id.to_string(),
            organization_id: organization_id.to_string(),
            name: name.to_string(),
        }))
    }

    /// Deletes projects. The call succeeds as a whole; failures are reported
    /// per item in [`ProjectDeleteResponse::error`].
    pub fn delete<I, S>(&self, ids: I) -> SdkResult<Vec<ProjectDeleteResponse>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let response: ProjectsDeleteResponse = self.run(ProjectsCommand::Delete(
            ProjectsDeleteRequest {
                ids: ids.into_iter().map(Into::into).collect(),
            },
        ))?;
        Ok(response.data)
    }

    fn run<T: serde::de::DeserializeOwned>(&self, command: ProjectsCommand) -> SdkResult<T> {
        self.client.run(command.into())
    }
}
