//! Project Assigner - GitHub Projects (beta) board automation
//!
//! Attaches an issue or pull request to a GitHub Projects (beta) board. The
//! board is resolved at the organization scope first and, on any failure, at
//! the user scope. Authentication is either a GitHub App installation or a
//! plain access token, selected once at startup.
//!
//! # Architecture
//!
//! This crate follows a hexagonal layout:
//!
//! - **Domain Layer** (`domain`): configuration models, error taxonomy, and
//!   the `ProjectsApi` port
//! - **Service Layer** (`services`): the assignment run with its
//!   organization-to-user fallback
//! - **Infrastructure Layer** (`infrastructure`): the GitHub GraphQL client
//!   and request authentication
//! - **CLI Layer** (`cli`): argument parsing and output publishing
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use project_assigner::cli::{self, Cli};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     cli::execute(Cli::parse()).await
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::AssignError;
pub use domain::models::{AssignerConfig, Credentials, ProjectScope};
pub use domain::ports::ProjectsApi;
pub use infrastructure::github::{GithubApiError, GithubClient, GithubClientConfig};
pub use services::Assigner;
