//! Pattern expansion and final validation of a layered [`Config`].
//!
//! Repository and secret entries containing `*` are expanded against the
//! remote listings. Matches are merged with the literal entries, leftover
//! patterns are dropped, and unless `yes` is set the result is confirmed
//! through a [`Selector`].

use std::collections::HashSet;

use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::filter::{is_pattern, Filter};
use crate::core::git;
use crate::core::remote::Remote;
use crate::core::types::split_repo;
use crate::error::{ConfigError, Result};

/// Interactive confirmation of an expanded candidate list.
pub trait Selector {
    /// Let the user pick from `items`, all initially selected.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` if the user aborts.
    fn select(&self, prompt: &str, items: &[String]) -> Result<Vec<String>>;
}

/// Selector that confirms every candidate without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Selector for AcceptAll {
    fn select(&self, _prompt: &str, items: &[String]) -> Result<Vec<String>> {
        Ok(items.to_vec())
    }
}

/// Expands patterns in a [`Config`] and checks it is runnable.
pub struct Resolver<'a> {
    remote: &'a Remote<'a>,
    selector: &'a dyn Selector,
}

impl<'a> Resolver<'a> {
    pub fn new(remote: &'a Remote<'a>, selector: &'a dyn Selector) -> Self {
        Self { remote, selector }
    }

    /// Expand patterns and validate, returning the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` before any remote call if there is
    /// no token, `ConfigError::NoRepos` / `ConfigError::NoSecrets` if a list
    /// ends up empty, `ConfigError::NoMatches` if repository expansion finds
    /// nothing, `Error::Cancelled` if the user aborts a prompt, or any API
    /// error from the listings.
    pub async fn resolve(&self, config: Config) -> Result<Config> {
        if config.token.is_empty() {
            return Err(ConfigError::MissingToken.into());
        }

        let repos = if config.repos.iter().any(|r| is_pattern(r)) {
            self.expand_repos(&config).await?
        } else {
            config.repos.clone()
        };

        let secrets = if config.secrets.iter().any(|s| is_pattern(s)) {
            self.expand_secrets(&config).await?
        } else {
            config.secrets.clone()
        };

        let config = Config {
            repos,
            secrets,
            ..config
        };
        validate(&config)?;

        info!(
            repos = config.repos.len(),
            secrets = config.secrets.len(),
            "configuration resolved"
        );
        Ok(config)
    }

    async fn expand_repos(&self, config: &Config) -> Result<Vec<String>> {
        let filter = Filter::new(&config.repos)?;

        let matched: Vec<String> = self
            .remote
            .repos()
            .await?
            .into_iter()
            .filter(|r| filter.matches(&r.full_name))
            .filter(|r| config.private || !r.private)
            .filter(|r| config.fork || !r.fork)
            .map(|r| r.full_name)
            .collect();
        debug!(matched = matched.len(), "repository patterns expanded");

        let candidates = merge_matches(&config.repos, matched);
        if candidates.is_empty() {
            return Err(ConfigError::NoMatches { kind: "repos" }.into());
        }

        if config.yes {
            return Ok(candidates);
        }
        self.selector.select("Select repos to sync", &candidates)
    }

    async fn expand_secrets(&self, config: &Config) -> Result<Vec<String>> {
        let central = match &config.repo {
            Some(repo) => repo.clone(),
            None => git::detect_repo(&config.cwd, &config.base_url)?,
        };
        debug!(repo = %central, "expanding secret patterns");

        let filter = Filter::new(&config.secrets)?;
        let matched: Vec<String> = self
            .remote
            .secrets(&central)
            .await?
            .into_iter()
            .filter(|s| filter.matches(&s.name))
            .map(|s| s.name)
            .collect();
        debug!(matched = matched.len(), "secret patterns expanded");

        let candidates = merge_matches(&config.secrets, matched);
        if config.yes || candidates.is_empty() {
            return Ok(candidates);
        }
        self.selector.select("Select secrets to sync", &candidates)
    }
}

/// Literal `entries` followed by new `matches`, deduplicated in first-seen
/// order, with every pattern dropped.
pub fn merge_matches(entries: &[String], matches: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .cloned()
        .chain(matches)
        .filter(|name| !is_pattern(name))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Check the post-conditions of resolution.
///
/// # Errors
///
/// Returns the `ConfigError` naming the first missing or malformed field.
pub fn validate(config: &Config) -> Result<()> {
    if config.token.is_empty() {
        return Err(ConfigError::MissingToken.into());
    }
    if config.repos.is_empty() {
        return Err(ConfigError::NoRepos.into());
    }
    if config.secrets.is_empty() {
        return Err(ConfigError::NoSecrets.into());
    }
    for repo in &config.repos {
        split_repo(repo)?;
    }
    Ok(())
}
