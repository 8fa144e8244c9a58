//! Dry-run aware front for the remote API.
//!
//! Every remote call made during a run goes through [`Remote`]. It reports
//! progress around each call and, when dry-run is on, never touches the
//! underlying [`Api`]: it logs what would have happened and returns a tagged
//! outcome instead. A dry-run key is `KeyFetch::DryRun`, never an empty key.

use std::future::Future;

use tracing::{debug, warn};

use crate::core::github::{Api, Upsert};
use crate::core::report::Reporter;
use crate::core::types::{PublicKey, Repo, SealedSecret, SecretInfo};
use crate::error::{CipherError, Result};

/// Outcome of fetching a repository's public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFetch {
    Fetched(PublicKey),
    /// Dry-run: no fetch was made.
    DryRun,
}

/// Outcome of delivering one secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Created,
    Updated,
    /// Dry-run: nothing was sent.
    DryRun,
}

impl From<Upsert> for Delivery {
    fn from(upsert: Upsert) -> Self {
        match upsert {
            Upsert::Created => Delivery::Created,
            Upsert::Updated => Delivery::Updated,
        }
    }
}

/// Labels shown around a single remote call.
struct Step {
    loading: String,
    success: String,
    failure: String,
    dry: String,
}

/// Remote API wrapped with dry-run handling and progress reporting.
pub struct Remote<'a> {
    api: &'a dyn Api,
    reporter: &'a dyn Reporter,
    dry: bool,
}

impl<'a> Remote<'a> {
    pub fn new(api: &'a dyn Api, reporter: &'a dyn Reporter, dry: bool) -> Self {
        Self { api, reporter, dry }
    }

    /// Reporter receiving progress for this run.
    pub fn reporter(&self) -> &'a dyn Reporter {
        self.reporter
    }

    /// Whether remote calls are being skipped.
    pub fn is_dry(&self) -> bool {
        self.dry
    }

    /// Repositories visible to the token. Empty under dry-run.
    ///
    /// # Errors
    ///
    /// Propagates any API error.
    pub async fn repos(&self) -> Result<Vec<Repo>> {
        let step = Step {
            loading: "Fetching repositories".to_string(),
            success: "Repositories fetched".to_string(),
            failure: "Failed to fetch repositories".to_string(),
            dry: "GET /user/repos".to_string(),
        };
        self.call(step, Vec::new(), self.api.list_repos()).await
    }

    /// Secrets stored in `repo`. Empty under dry-run.
    ///
    /// # Errors
    ///
    /// Propagates any API error.
    pub async fn secrets(&self, repo: &str) -> Result<Vec<SecretInfo>> {
        let step = Step {
            loading: format!("Fetching secrets of {}", repo),
            success: format!("Secrets fetched for {}", repo),
            failure: format!("Failed to fetch secrets of {}", repo),
            dry: format!("GET /repos/{}/actions/secrets", repo),
        };
        self.call(step, Vec::new(), self.api.list_secrets(repo)).await
    }

    /// The sealing key of `repo`.
    ///
    /// # Errors
    ///
    /// Propagates any API error.
    pub async fn public_key(&self, repo: &str) -> Result<KeyFetch> {
        let step = Step {
            loading: format!("Fetching public key for {}", repo),
            success: format!("Public key fetched for {}", repo),
            failure: format!("Failed to fetch public key for {}", repo),
            dry: format!("GET /repos/{}/actions/secrets/public-key", repo),
        };
        let fetch = async { self.api.public_key(repo).await.map(KeyFetch::Fetched) };
        self.call(step, KeyFetch::DryRun, fetch).await
    }

    /// Seal `value` with `key` and store it as secret `name` in `repo`.
    ///
    /// Sealing happens only when the call is really made.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::KeyUnavailable` if `key` is a dry-run key
    /// outside dry-run, a sealing error, or any API error.
    pub async fn upsert(
        &self,
        repo: &str,
        name: &str,
        value: &str,
        key: &KeyFetch,
    ) -> Result<Delivery> {
        let step = Step {
            loading: format!("Create or update {} for {}", name, repo),
            success: format!("{} created/updated for {}", name, repo),
            failure: format!("Failed to create or update {} for {}", name, repo),
            dry: format!("PUT /repos/{}/actions/secrets/{}", repo, name),
        };
        self.call(step, Delivery::DryRun, self.deliver(repo, name, value, key))
            .await
    }

    async fn deliver(
        &self,
        repo: &str,
        name: &str,
        value: &str,
        key: &KeyFetch,
    ) -> Result<Delivery> {
        let KeyFetch::Fetched(key) = key else {
            return Err(CipherError::KeyUnavailable(repo.to_string()).into());
        };
        let sealed = SealedSecret::new(value, key)?;
        let upsert = self.api.put_secret(repo, name, &sealed).await?;
        Ok(upsert.into())
    }

    /// Run `request` unless dry-run, reporting around it.
    ///
    /// `request` is lazy: under dry-run it is dropped without being polled.
    async fn call<T, F>(&self, step: Step, dry_value: T, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.dry {
            debug!(action = %step.dry, "dry run");
            self.reporter.dry_run(&step.dry);
            return Ok(dry_value);
        }

        self.reporter.step(&step.loading);
        match request.await {
            Ok(value) => {
                self.reporter.done(true, &step.success);
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "{}", step.failure);
                self.reporter.done(false, &step.failure);
                Err(e)
            }
        }
    }
}
