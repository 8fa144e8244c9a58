//! Error types.
//!
//! A single [`Error`] composed of per-domain enums so callers can match on
//! the failure class (configuration, remote API, sealing) and the binary can
//! attach hints to well-known cases.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a sync run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// A secret has no (or an empty) value in the local environment.
    #[error("secret {0} not found in environment variables")]
    MissingEnv(String),

    /// The user aborted an interactive selection.
    #[error("aborting: {0}")]
    Cancelled(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration could not be resolved into a runnable state.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("please provide a GitHub token")]
    MissingToken,

    #[error("please provide repos to sync")]
    NoRepos,

    #[error("please provide secrets to sync")]
    NoSecrets,

    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepo(String),

    #[error("cannot detect GitHub repository: {0}")]
    RepoNotDetected(String),

    #[error("no {kind} found")]
    NoMatches { kind: &'static str },
}

/// The remote API rejected a request or could not be reached.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Sealing a secret value failed.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("sealing failed: {0}")]
    SealFailed(String),

    #[error("no public key fetched for {0}")]
    KeyUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
