//! Wire types for the GraphQL calls this tool issues.
//!
//! One Variables struct per call, serialized exactly as the API expects.
//! Responses are deserialized into narrow structs that only name the fields
//! we read.

use serde::{Deserialize, Serialize};

/// Envelope for every GraphQL request.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<V: Serialize> {
    /// Query or mutation text.
    pub query: &'static str,
    /// Typed variables for the call.
    pub variables: V,
}

/// Envelope for every GraphQL response.
///
/// GitHub returns 200 with an `errors` array on query-level failures, so both
/// halves are optional.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Variables for the organization-scope project lookup.
#[derive(Debug, Serialize)]
pub struct OrganizationProjectVariables<'a> {
    pub owner: &'a str,
    pub number: u32,
}

/// Variables for the user-scope project lookup.
#[derive(Debug, Serialize)]
pub struct UserProjectVariables<'a> {
    pub login: &'a str,
    pub number: u32,
}

/// Variables for the attach mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemVariables<'a> {
    pub project: &'a str,
    pub content_id: &'a str,
}

/// `data` shape of the organization lookup.
#[derive(Debug, Deserialize)]
pub struct OrganizationData {
    pub organization: Option<ProjectOwner>,
}

/// `data` shape of the user lookup.
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<ProjectOwner>,
}

/// Owner node carrying the requested project, when it exists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOwner {
    pub project_next: Option<ProjectNode>,
}

/// A project node; only the opaque id is read.
#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub id: String,
}

/// `data` shape of the attach mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemData {
    pub add_project_next_item: Option<AddItemPayload>,
}

/// Payload of `addProjectNextItem`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemPayload {
    pub project_next_item: Option<ProjectNode>,
}
