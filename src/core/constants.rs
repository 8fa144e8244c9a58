//! Constants used throughout gh-secrets-sync.
//!
//! Centralizes magic strings and configuration defaults.

/// Default configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "./secrets.config.yaml";

/// Pinned GitHub REST API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Default GitHub host.
pub const BASE_URL: &str = "github.com";

/// API root used when the host is `github.com`.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Environment variables consulted for a token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["GH_PAT", "GITHUB_TOKEN"];

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GH_SECRETS_SYNC_LOG";

/// Wildcard marker that turns a name into a pattern.
pub const WILDCARD: char = '*';

/// Page size for list endpoints.
pub const PER_PAGE: usize = 100;

/// `User-Agent` header; GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("gh-secrets-sync/", env!("CARGO_PKG_VERSION"));

/// Config file key holding repositories.
pub const FILE_REPOS_KEY: &str = "repos";

/// Config file key holding secret names.
pub const FILE_SECRETS_KEY: &str = "envs";
