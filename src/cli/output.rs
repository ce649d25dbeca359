//! Output formatting and publishing for the CLI.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

/// A renderable command result.
pub trait CommandOutput: Serialize {
    /// Human-readable rendering for terminal use.
    fn to_human(&self) -> String;

    /// Structured rendering for `--json` mode.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the selected format.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Result of a successful assignment run.
#[derive(Debug, Serialize)]
pub struct AssignOutcome {
    /// Id of the project item created by the attach mutation.
    #[serde(rename = "project-item-id")]
    pub project_item_id: String,
}

impl CommandOutput for AssignOutcome {
    fn to_human(&self) -> String {
        format!("project-item-id: {}", self.project_item_id)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "project-item-id": self.project_item_id })
    }
}

/// Publish a step output the way the actions runner expects.
///
/// Appends `name=value` to the file named by `GITHUB_OUTPUT` when that
/// variable is set; otherwise does nothing (plain CLI use).
pub fn publish_github_output(name: &str, value: &str) -> anyhow::Result<()> {
    let Ok(path) = std::env::var("GITHUB_OUTPUT") else {
        debug!("GITHUB_OUTPUT not set, skipping step output publishing");
        return Ok(());
    };

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    writeln!(file, "{name}={value}")?;

    debug!(%path, name, "Published step output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_renderings() {
        let outcome = AssignOutcome {
            project_item_id: "PNI_5".to_string(),
        };

        assert_eq!(outcome.to_human(), "project-item-id: PNI_5");
        assert_eq!(outcome.to_json()["project-item-id"], "PNI_5");
    }

    #[test]
    fn test_publish_appends_to_github_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");

        temp_env::with_var("GITHUB_OUTPUT", Some(path.to_str().unwrap()), || {
            publish_github_output("project-item-id", "PNI_5").unwrap();
            publish_github_output("other", "x").unwrap();
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "project-item-id=PNI_5\nother=x\n");
    }

    #[test]
    fn test_publish_is_noop_without_env() {
        temp_env::with_var_unset("GITHUB_OUTPUT", || {
            publish_github_output("project-item-id", "PNI_5").unwrap();
        });
    }
}
