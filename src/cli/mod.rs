//! CLI layer: argument parsing, command execution, and output publishing.

pub mod output;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use crate::domain::error::AssignError;
use crate::domain::models::{AssignerConfig, Credentials};
use crate::infrastructure::github::{GithubClient, GithubClientConfig};
use crate::services::Assigner;

pub use output::{AssignOutcome, CommandOutput};
pub use types::Cli;

/// Execute an assignment run from parsed CLI arguments.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let credentials = Credentials::select(
        cli.app_integration_id,
        cli.app_installation_id,
        cli.app_private_key,
        cli.token,
    )
    .ok_or(AssignError::MissingCredentials)?;

    let config = AssignerConfig {
        owner: cli.owner,
        project_number: cli.project_id,
        issue_id: cli.issue_id,
        credentials,
    };

    let client = GithubClient::new(
        config.credentials.clone(),
        GithubClientConfig {
            api_url: cli.api_url,
            ..Default::default()
        },
    )
    .context("Failed to build GitHub client")?;

    let assigner = Assigner::new(Arc::new(client), config);
    let project_item_id = assigner.run().await?;

    let outcome = AssignOutcome { project_item_id };
    output::publish_github_output("project-item-id", &outcome.project_item_id)?;
    output::output(&outcome, cli.json);

    Ok(())
}

/// Report a fatal error and terminate with a non-zero exit code.
///
/// The message goes to stderr; the full error chain goes to the diagnostic
/// channel at debug level.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    debug!(error = ?err, "Run failed");

    if json_mode {
        let payload = serde_json::json!({ "error": err.to_string() });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }

    std::process::exit(1);
}
