//! GitHub API integration
//!
//! GraphQL transport, request authentication, and wire types for the
//! Projects (beta) calls. Satisfies the `ProjectsApi` port defined in the
//! domain layer.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::AuthProvider;
pub use client::{GithubClient, GithubClientConfig};
pub use error::GithubApiError;
