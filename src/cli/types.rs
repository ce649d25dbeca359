//! CLI type definitions
//!
//! This module contains the clap command structure that defines the CLI
//! interface. Every flag falls back to the corresponding GitHub Actions
//! `INPUT_*` environment variable, so the binary works both as a plain CLI
//! and inside an action runner.

use clap::Parser;

/// Attach an issue or pull request to a GitHub Projects (beta) board.
#[derive(Debug, Parser)]
#[command(name = "project-assigner")]
#[command(about = "Attach issues and pull requests to GitHub Projects (beta) boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Organization or user login owning the project
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: String,

    /// Project (beta) number within the owner scope
    #[arg(long, env = "INPUT_PROJECT_ID")]
    pub project_id: u32,

    /// Node id of the issue or pull request to attach
    #[arg(long, env = "INPUT_ISSUE_ID")]
    pub issue_id: String,

    /// Access token, used when the App triple is not fully provided
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub App id (all three App flags must be set to select App auth)
    #[arg(long, env = "INPUT_APP_INTEGRATION_ID")]
    pub app_integration_id: Option<String>,

    /// GitHub App installation id
    #[arg(long, env = "INPUT_APP_INSTALLATION_ID")]
    pub app_installation_id: Option<String>,

    /// PEM-encoded GitHub App private key
    #[arg(long, env = "INPUT_APP_PRIVATE_KEY", hide_env_values = true)]
    pub app_private_key: Option<String>,

    /// API base URL (override for GHES or tests)
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_flags() {
        let cli = Cli::try_parse_from([
            "project-assigner",
            "--owner",
            "acme",
            "--project-id",
            "3",
            "--issue-id",
            "I_9",
            "--token",
            "t",
        ])
        .unwrap();

        assert_eq!(cli.owner, "acme");
        assert_eq!(cli.project_id, 3);
        assert_eq!(cli.issue_id, "I_9");
        assert_eq!(cli.token.as_deref(), Some("t"));
        assert_eq!(cli.api_url, "https://api.github.com");
        assert!(!cli.json);
    }

    #[test]
    fn test_project_id_must_be_numeric() {
        let result = Cli::try_parse_from([
            "project-assigner",
            "--owner",
            "acme",
            "--project-id",
            "three",
            "--issue-id",
            "I_9",
        ]);

        assert!(result.is_err());
    }
}
