//! GitHub token discovery.

use crate::runner::RunnerError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolves a GitHub token.
///
/// Order: the explicit value, then [`TOKEN_ENV_VARS`], then `gh auth token`.
/// Blank values are ignored.
///
/// # Errors
///
/// Returns [`RunnerError::MissingToken`] if no source yields a token.
pub async fn resolve_token(explicit: Option<String>) -> Result<String, RunnerError> {
    if let Some(token) = explicit.and_then(non_blank) {
        return Ok(token);
    }
    if let Some(token) = token_from_env() {
        return Ok(token);
    }
    token_from_gh_cli().await.ok_or(RunnerError::MissingToken)
}

/// Reads a token from the first non-blank variable in [`TOKEN_ENV_VARS`].
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().and_then(non_blank))
}

/// Asks the GitHub CLI for its stored token.
async fn token_from_gh_cli() -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            non_blank(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(stderr = %stderr.trim(), "gh auth token failed");
            None
        }
        Err(e) => {
            debug!(error = %e, "gh is not available");
            None
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
