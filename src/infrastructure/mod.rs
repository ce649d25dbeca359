//! Infrastructure layer module
//!
//! External integrations live here. For this tool that is a single adapter:
//! the GitHub GraphQL client (with its authentication provider), which
//! satisfies the port traits defined in the domain layer.

pub mod github;
