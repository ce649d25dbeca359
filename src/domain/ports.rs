//! Port traits implemented by the infrastructure layer.

use async_trait::async_trait;

use super::error::AssignError;

/// Remote Projects (beta) API surface the assigner drives.
///
/// The production implementation is the GraphQL client in
/// `infrastructure::github`; tests substitute an in-memory mock to exercise
/// the fallback logic without a network.
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Resolve the node id of an organization-scoped project.
    ///
    /// Fails when the organization has no project with that number, or on any
    /// transport/auth/GraphQL failure.
    async fn resolve_organization_project(
        &self,
        owner: &str,
        number: u32,
    ) -> Result<String, AssignError>;

    /// Resolve the node id of a user-scoped project. Failure semantics are
    /// analogous to the organization lookup.
    async fn resolve_user_project(&self, owner: &str, number: u32) -> Result<String, AssignError>;

    /// Attach content (an issue or pull request node id) to a resolved
    /// project, returning the created project-item id.
    async fn attach(&self, project_id: &str, content_id: &str) -> Result<String, AssignError>;
}
