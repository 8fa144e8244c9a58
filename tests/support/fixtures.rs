//! Test fixtures and constants.

use std::collections::HashMap;

use gh_secrets_sync::core::config::Config;

/// Token used by every library-level test.
pub const TEST_TOKEN: &str = "ghp_test_token";

/// Standard secret values used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb"),
    ("API_KEY", "sk-test-12345"),
    ("JWT_SECRET", "super-secret-jwt-token"),
];

/// Config file listing two repositories and two secrets.
pub const SAMPLE_CONFIG: &str = r#"
repos:
  - octo/api
  - octo/web
envs:
  - DATABASE_URL
  - API_KEY
"#;

/// Owned copies of `items`.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Environment map holding `pairs`.
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Runnable configuration for `repos` and `secrets` with a test token.
pub fn config(repos: &[&str], secrets: &[&str]) -> Config {
    Config {
        token: TEST_TOKEN.to_string(),
        repos: strings(repos),
        secrets: strings(secrets),
        ..Config::default()
    }
}
