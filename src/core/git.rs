//! Local git repository detection.
//!
//! Used to find the central repository whose secret list drives secret-name
//! pattern expansion when none is configured.

use std::path::Path;
use std::process::Command;

use regex::RegexBuilder;
use tracing::debug;

use crate::core::types::RepoName;
use crate::error::{ConfigError, Result};

/// Detect `owner/name` from the `origin` remote of the repository at `cwd`.
///
/// # Errors
///
/// Returns `ConfigError::RepoNotDetected` if git is unavailable, there is no
/// `origin` remote, or its URL does not point at `base_url`.
pub fn detect_repo(cwd: &Path, base_url: &str) -> Result<RepoName> {
    let git = which::which("git")
        .map_err(|e| ConfigError::RepoNotDetected(format!("git not found: {}", e)))?;

    let output = Command::new(git)
        .args(["config", "--get", "remote.origin.url"])
        .current_dir(cwd)
        .output()
        .map_err(|e| ConfigError::RepoNotDetected(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(ConfigError::RepoNotDetected("no origin remote configured".to_string()).into());
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!(url = %url, "origin remote");

    parse_remote_url(&url, base_url)
}

/// Extract `owner/name` from an HTTPS or SSH remote URL on `base_url`.
///
/// # Errors
///
/// Returns `ConfigError::RepoNotDetected` if the URL does not match.
pub fn parse_remote_url(url: &str, base_url: &str) -> Result<RepoName> {
    let pattern = format!(
        r"{}[/:]([\w.-]+?)/([\w.-]+?)(?:\.git)?/?$",
        regex::escape(base_url)
    );
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::RepoNotDetected(e.to_string()))?;

    let caps = re.captures(url.trim()).ok_or_else(|| {
        ConfigError::RepoNotDetected(format!("cannot parse GitHub repo from url {}", url))
    })?;

    Ok(format!("{}/{}", &caps[1], &caps[2]))
}
