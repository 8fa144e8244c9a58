//! GitHub token discovery.
//!
//! Tokens are taken from the first source in a chain that yields a non-empty
//! value. Sources are evaluated lazily, so the `gh` CLI is only spawned when
//! nothing earlier in the chain produced a token.

use std::process::Command;

use tracing::debug;

use crate::core::constants::TOKEN_ENV_VARS;
use crate::core::env::EnvSource;

/// A place a token may come from.
pub trait TokenSource {
    /// Short label used in logs.
    fn name(&self) -> String;

    /// The token, or `None` if this source has none. Never fails.
    fn token(&self) -> Option<String>;
}

/// A token passed explicitly by the caller.
#[derive(Debug, Clone)]
pub struct Explicit(pub Option<String>);

impl TokenSource for Explicit {
    fn name(&self) -> String {
        "option".to_string()
    }

    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// A token held in an environment variable.
pub struct EnvVar<'a> {
    key: &'static str,
    env: &'a dyn EnvSource,
}

impl<'a> EnvVar<'a> {
    pub fn new(key: &'static str, env: &'a dyn EnvSource) -> Self {
        Self { key, env }
    }
}

impl TokenSource for EnvVar<'_> {
    fn name(&self) -> String {
        self.key.to_string()
    }

    fn token(&self) -> Option<String> {
        self.env.var(self.key)
    }
}

/// `gh auth token` from an installed GitHub CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhCli;

impl TokenSource for GhCli {
    fn name(&self) -> String {
        "gh auth token".to_string()
    }

    fn token(&self) -> Option<String> {
        let gh = match which::which("gh") {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "gh CLI not found");
                return None;
            }
        };

        match Command::new(gh).args(["auth", "token"]).output() {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).to_string())
            }
            Ok(output) => {
                debug!(status = %output.status, "gh auth token failed");
                None
            }
            Err(e) => {
                debug!(error = %e, "failed to run gh");
                None
            }
        }
    }
}

/// The default chain: explicit option, `GH_PAT`, `GITHUB_TOKEN`, then `gh`.
pub fn default_chain<'a>(
    explicit: Option<String>,
    env: &'a dyn EnvSource,
) -> Vec<Box<dyn TokenSource + 'a>> {
    let mut chain: Vec<Box<dyn TokenSource + 'a>> = vec![Box::new(Explicit(explicit))];
    for key in TOKEN_ENV_VARS {
        chain.push(Box::new(EnvVar::new(*key, env)));
    }
    chain.push(Box::new(GhCli));
    chain
}

/// First non-empty token in `chain`, trimmed.
pub fn resolve(chain: &[Box<dyn TokenSource + '_>]) -> Option<String> {
    chain.iter().find_map(|source| {
        let token = source.token()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        debug!(source = %source.name(), "token resolved");
        Some(token.to_string())
    })
}
