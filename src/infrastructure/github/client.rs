//! GraphQL client for the GitHub Projects (beta) API.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::auth::AuthProvider;
use super::error::GithubApiError;
use super::types::{
    AddItemData, AddItemVariables, GraphqlRequest, GraphqlResponse, OrganizationData,
    OrganizationProjectVariables, UserData, UserProjectVariables,
};
use crate::domain::error::AssignError;
use crate::domain::models::{Credentials, ProjectScope};
use crate::domain::ports::ProjectsApi;

const ORGANIZATION_PROJECT_QUERY: &str = r"
    query ($owner: String!, $number: Int!) {
        organization(login: $owner) {
            projectNext(number: $number) {
                id
            }
        }
    }
";

const USER_PROJECT_QUERY: &str = r"
    query ($login: String!, $number: Int!) {
        user(login: $login) {
            projectNext(number: $number) {
                id
            }
        }
    }
";

const ADD_ITEM_MUTATION: &str = r"
    mutation ($project: ID!, $contentId: ID!) {
        addProjectNextItem(input: {projectId: $project, contentId: $contentId}) {
            projectNextItem {
                id
            }
        }
    }
";

/// Configuration for the GitHub client
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// REST/GraphQL base URL (overridable for tests and GHES).
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the GitHub GraphQL endpoint
///
/// Implements [`ProjectsApi`]: the two scope lookups and the attach mutation.
/// Every request is signed by the [`AuthProvider`] built from the run's
/// credentials. No retries and no rate limiting; each call is issued once.
pub struct GithubClient {
    http: ReqwestClient,
    graphql_url: String,
    auth: AuthProvider,
}

impl GithubClient {
    /// Create a client for the given credentials.
    pub fn new(
        credentials: Credentials,
        config: GithubClientConfig,
    ) -> Result<Self, GithubApiError> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let auth = AuthProvider::new(credentials, config.api_url.clone(), http.clone());

        Ok(Self {
            http,
            graphql_url: format!("{}/graphql", config.api_url),
            auth,
        })
    }

    /// Issue one GraphQL call and return the `data` payload.
    ///
    /// An HTTP error status, a non-empty `errors` array, or a missing `data`
    /// field all count as failure.
    async fn graphql<V, D>(&self, query: &'static str, variables: V) -> Result<D, GithubApiError>
    where
        V: Serialize + Send,
        D: DeserializeOwned,
    {
        let authorization = self.auth.authorization_header().await?;

        let response = self
            .http
            .post(&self.graphql_url)
            .header("authorization", authorization)
            .header("user-agent", "project-assigner")
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "GraphQL response");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(GithubApiError::from_status(status, body));
        }

        let envelope: GraphqlResponse<D> = response.json().await?;

        if let Some(error) = envelope.errors.first() {
            return Err(GithubApiError::Graphql(error.message.clone()));
        }

        envelope
            .data
            .ok_or_else(|| GithubApiError::Graphql("response carried no data".to_string()))
    }

    fn not_found(scope: ProjectScope, owner: &str, number: u32) -> AssignError {
        AssignError::ProjectNotFound {
            scope,
            owner: owner.to_string(),
            number,
        }
    }
}

#[async_trait]
impl ProjectsApi for GithubClient {
    async fn resolve_organization_project(
        &self,
        owner: &str,
        number: u32,
    ) -> Result<String, AssignError> {
        let data: OrganizationData = self
            .graphql(
                ORGANIZATION_PROJECT_QUERY,
                OrganizationProjectVariables { owner, number },
            )
            .await?;

        data.organization
            .and_then(|org| org.project_next)
            .map(|project| project.id)
            .ok_or_else(|| Self::not_found(ProjectScope::Organization, owner, number))
    }

    async fn resolve_user_project(&self, owner: &str, number: u32) -> Result<String, AssignError> {
        let data: UserData = self
            .graphql(USER_PROJECT_QUERY, UserProjectVariables { login: owner, number })
            .await?;

        data.user
            .and_then(|user| user.project_next)
            .map(|project| project.id)
            .ok_or_else(|| Self::not_found(ProjectScope::User, owner, number))
    }

    async fn attach(&self, project_id: &str, content_id: &str) -> Result<String, AssignError> {
        let data: AddItemData = self
            .graphql(
                ADD_ITEM_MUTATION,
                AddItemVariables {
                    project: project_id,
                    content_id,
                },
            )
            .await?;

        data.add_project_next_item
            .and_then(|payload| payload.project_next_item)
            .map(|item| item.id)
            .ok_or_else(|| {
                GithubApiError::Graphql("addProjectNextItem returned no item".to_string()).into()
            })
    }
}
