//! GitHub Actions secrets API.
//!
//! [`Api`] is the transport-level seam: every method performs exactly one
//! logical remote operation and escalates non-success statuses as
//! `ApiError::Status`. It never retries and knows nothing about dry-run;
//! see [`crate::core::remote`] for that.

use async_trait::async_trait;

use crate::core::types::{PublicKey, Repo, SealedSecret, SecretInfo};
use crate::error::Result;

mod client;

pub use client::{api_url_for, GitHubClient};

/// Whether an upsert created a new secret or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Remote operations needed to sync secrets.
#[async_trait]
pub trait Api: Send + Sync {
    /// Repositories visible to the token's principal.
    async fn list_repos(&self) -> Result<Vec<Repo>>;

    /// Secret names stored in `repo`.
    async fn list_secrets(&self, repo: &str) -> Result<Vec<SecretInfo>>;

    /// The sealing key of `repo`.
    async fn public_key(&self, repo: &str) -> Result<PublicKey>;

    /// Create or replace secret `name` in `repo`.
    async fn put_secret(&self, repo: &str, name: &str, secret: &SealedSecret) -> Result<Upsert>;
}
