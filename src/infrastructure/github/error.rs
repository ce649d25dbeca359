//! Error types for the GitHub API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the GitHub GraphQL transport
#[derive(Error, Debug)]
pub enum GithubApiError {
    #[error("Invalid credentials (401 Unauthorized)")]
    InvalidCredentials,

    #[error("Forbidden (403): {0}")]
    Forbidden(String),

    #[error("Resource not found (404)")]
    NotFound,

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("HTTP error ({status}): {body}")]
    Http { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("App token exchange failed: {0}")]
    AppToken(String),

    #[error("Failed to sign App JWT: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl GithubApiError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::InvalidCredentials,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::Http { status, body },
        }
    }
}
