//! Secret delivery.
//!
//! Repositories are processed one at a time in list order. Each repository's
//! public key is fetched once, then every secret is looked up in the local
//! environment by its bare name, sealed, and stored under the prefixed name.
//! Any error aborts the whole run; the only recovered condition is a missing
//! environment value when `strict` is off.

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::env::EnvSource;
use crate::core::remote::{Delivery, Remote};
use crate::core::types::{RepoName, SecretName};
use crate::error::{Error, Result};

/// A secret left out of one repository because it had no local value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub repo: RepoName,
    pub secret: SecretName,
}

/// Result of a sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Repositories processed
    pub repos: usize,
    /// Secrets newly created
    pub created: usize,
    /// Existing secrets replaced
    pub updated: usize,
    /// Deliveries skipped by dry-run
    pub planned: usize,
    /// Secrets skipped for lack of a value (non-strict only)
    pub skipped: Vec<Skipped>,
}

impl SyncReport {
    /// Deliveries that reached (or would have reached) the remote store.
    pub fn delivered(&self) -> usize {
        self.created + self.updated + self.planned
    }
}

/// Drives delivery of every configured secret to every configured repository.
pub struct Syncer<'a> {
    config: &'a Config,
    remote: &'a Remote<'a>,
    env: &'a dyn EnvSource,
}

impl<'a> Syncer<'a> {
    pub fn new(config: &'a Config, remote: &'a Remote<'a>, env: &'a dyn EnvSource) -> Self {
        Self {
            config,
            remote,
            env,
        }
    }

    /// Run the sync.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingEnv` in strict mode when a secret has no value,
    /// or the first API or sealing error encountered.
    pub async fn run(&self) -> Result<SyncReport> {
        info!(
            repos = self.config.repos.len(),
            secrets = self.config.secrets.len(),
            dry = self.remote.is_dry(),
            strict = self.config.strict,
            "starting sync"
        );

        let mut report = SyncReport::default();

        for repo in &self.config.repos {
            let key = self.remote.public_key(repo).await?;

            for name in &self.config.secrets {
                let Some(value) = self.lookup(name)? else {
                    report.skipped.push(Skipped {
                        repo: repo.clone(),
                        secret: name.clone(),
                    });
                    continue;
                };

                let remote_name = self.config.remote_name(name);
                debug!(repo = %repo, env = %name, secret = %remote_name, "delivering");

                match self.remote.upsert(repo, &remote_name, &value, &key).await? {
                    Delivery::Created => report.created += 1,
                    Delivery::Updated => report.updated += 1,
                    Delivery::DryRun => report.planned += 1,
                }
            }

            report.repos += 1;
        }

        info!(
            created = report.created,
            updated = report.updated,
            planned = report.planned,
            skipped = report.skipped.len(),
            "sync finished"
        );
        Ok(report)
    }

    /// Value of `name` in the local environment.
    ///
    /// `Ok(None)` means the secret is missing and should be skipped.
    fn lookup(&self, name: &str) -> Result<Option<Zeroizing<String>>> {
        if let Some(value) = self.env.var(name) {
            return Ok(Some(Zeroizing::new(value)));
        }

        if self.config.strict {
            return Err(Error::MissingEnv(name.to_string()));
        }

        warn!(secret = name, "secret not found in environment, skipping");
        self.remote
            .reporter()
            .warn(&format!("Secret {} not found in environment variables", name));
        Ok(None)
    }
}
