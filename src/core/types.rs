//! Remote data types and domain aliases.
//!
//! Shapes mirror the GitHub REST payloads for repositories, Actions secrets
//! and repository public keys.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A repository identifier in `owner/name` form.
pub type RepoName = String;

/// A secret name (e.g., API_KEY).
pub type SecretName = String;

/// A repository visible to the authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub full_name: RepoName,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
}

/// Metadata of a secret stored in a repository. Values are never readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretInfo {
    pub name: SecretName,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Page of `GET /repos/{owner}/{repo}/actions/secrets`.
#[derive(Debug, Deserialize)]
pub struct SecretList {
    #[serde(default)]
    pub secrets: Vec<SecretInfo>,
}

/// A repository's sealing key; `key` is base64.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub key_id: String,
    pub key: String,
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

/// Body of `PUT /repos/{owner}/{repo}/actions/secrets/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealedSecret {
    pub encrypted_value: String,
    pub key_id: String,
}

/// Split `owner/name` into its parts.
///
/// # Errors
///
/// Returns `ConfigError::InvalidRepo` unless there are exactly two non-empty
/// segments.
pub fn split_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(ConfigError::InvalidRepo(repo.to_string()).into()),
    }
}
