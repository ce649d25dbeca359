use thiserror::Error;

use super::models::ProjectScope;
use crate::infrastructure::github::GithubApiError;

/// Domain-level errors for an assignment run
#[derive(Error, Debug)]
pub enum AssignError {
    #[error(
        "No usable credentials: provide either the complete GitHub App triple \
         (app id, installation id, private key) or a token"
    )]
    MissingCredentials,

    #[error("No {scope} project with number {number} for owner {owner}")]
    ProjectNotFound {
        scope: ProjectScope,
        owner: String,
        number: u32,
    },

    #[error("GitHub API error: {0}")]
    Api(#[from] GithubApiError),
}
