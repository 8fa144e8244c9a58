//! Configuration layering.
//!
//! A run is configured from three layers, lowest first: hard-coded defaults,
//! the YAML config file, then explicit options (CLI flags and environment).
//! Layers are merged by [`Config::layer`] into a new value; nothing is
//! mutated in place. Pattern expansion and final validation happen later in
//! [`crate::core::resolve`].

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::core::constants::{
    API_VERSION, BASE_URL, CONFIG_FILE, FILE_REPOS_KEY, FILE_SECRETS_KEY,
};
use crate::core::env::EnvSource;
use crate::core::token;
use crate::core::types::{RepoName, SecretName};
use crate::error::{ConfigError, Result};

/// Options supplied by the caller. `None` and empty lists defer to lower
/// layers.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Config file path, relative to `cwd`.
    pub config: Option<PathBuf>,
    pub repos: Vec<String>,
    pub secrets: Vec<String>,
    pub token: Option<String>,
    pub env_prefix: Option<String>,
    pub api_version: Option<String>,
    pub base_url: Option<String>,
    /// Central repository for secret-name expansion.
    pub repo: Option<RepoName>,
    pub cwd: Option<PathBuf>,
    pub private: Option<bool>,
    pub fork: Option<bool>,
    pub strict: Option<bool>,
    pub dry: Option<bool>,
    pub yes: Option<bool>,
}

/// Lists read from the YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub repos: Vec<String>,
    pub envs: Vec<String>,
}

impl FileConfig {
    /// Read and parse the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read or
    /// `ConfigError::Parse` if it is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    /// Parse config file contents. `path` is only used in errors.
    ///
    /// Unknown keys are ignored. A `repos` or `envs` value that is not a
    /// list counts as absent, and non-string list items are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if `contents` is not valid YAML.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let doc: Value = serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self {
            repos: string_list(doc.get(FILE_REPOS_KEY)),
            envs: string_list(doc.get(FILE_SECRETS_KEY)),
        };

        debug!(
            repos = file.repos.len(),
            envs = file.envs.len(),
            "config file parsed"
        );

        Ok(file)
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_sequence)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Fully layered configuration for a run.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub repos: Vec<RepoName>,
    pub secrets: Vec<SecretName>,
    /// Prepended to secret names on the remote side only.
    pub env_prefix: String,
    pub api_version: String,
    pub base_url: String,
    pub cwd: PathBuf,
    pub config_path: PathBuf,
    pub repo: Option<RepoName>,
    /// Include private repositories in pattern expansion.
    pub private: bool,
    /// Include forks in pattern expansion.
    pub fork: bool,
    /// Abort when a secret is missing from the environment.
    pub strict: bool,
    pub dry: bool,
    /// Accept pattern expansions without prompting.
    pub yes: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("token", &token)
            .field("repos", &self.repos)
            .field("secrets", &self.secrets)
            .field("env_prefix", &self.env_prefix)
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("cwd", &self.cwd)
            .field("config_path", &self.config_path)
            .field("repo", &self.repo)
            .field("private", &self.private)
            .field("fork", &self.fork)
            .field("strict", &self.strict)
            .field("dry", &self.dry)
            .field("yes", &self.yes)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            repos: Vec::new(),
            secrets: Vec::new(),
            env_prefix: String::new(),
            api_version: API_VERSION.to_string(),
            base_url: BASE_URL.to_string(),
            cwd: PathBuf::from("."),
            config_path: PathBuf::from(CONFIG_FILE),
            repo: None,
            private: false,
            fork: false,
            strict: true,
            dry: false,
            yes: false,
        }
    }
}

impl Config {
    /// Merge `defaults` < `file` < `options` into a new configuration.
    ///
    /// A list given in `options` wins over the file's list; the file only
    /// fills lists left empty.
    pub fn layer(defaults: Config, file: Option<FileConfig>, options: Options) -> Config {
        let file = file.unwrap_or_default();

        let pick = |explicit: Vec<String>, from_file: Vec<String>, default: Vec<String>| {
            if !explicit.is_empty() {
                explicit
            } else if !from_file.is_empty() {
                from_file
            } else {
                default
            }
        };

        Config {
            token: options.token.unwrap_or(defaults.token),
            repos: pick(options.repos, file.repos, defaults.repos),
            secrets: pick(options.secrets, file.envs, defaults.secrets),
            env_prefix: options.env_prefix.unwrap_or(defaults.env_prefix),
            api_version: options.api_version.unwrap_or(defaults.api_version),
            base_url: options.base_url.unwrap_or(defaults.base_url),
            cwd: options.cwd.unwrap_or(defaults.cwd),
            config_path: options.config.unwrap_or(defaults.config_path),
            repo: options.repo.or(defaults.repo),
            private: options.private.unwrap_or(defaults.private),
            fork: options.fork.unwrap_or(defaults.fork),
            strict: options.strict.unwrap_or(defaults.strict),
            dry: options.dry.unwrap_or(defaults.dry),
            yes: options.yes.unwrap_or(defaults.yes),
        }
    }

    /// Name under which `secret` is stored remotely.
    pub fn remote_name(&self, secret: &str) -> String {
        format!("{}{}", self.env_prefix, secret)
    }
}

/// Build the layered configuration for `options`.
///
/// The token is resolved through the default provider chain (explicit
/// option, `GH_PAT`, `GITHUB_TOKEN`, `gh auth token`). The config file is
/// skipped entirely when both repos and secrets were given explicitly.
///
/// # Errors
///
/// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the config file
/// is needed and cannot be loaded.
pub fn load(mut options: Options, env: &dyn EnvSource) -> Result<Config> {
    let cwd = match options.cwd.take() {
        Some(cwd) => cwd,
        None => std::env::current_dir()?,
    };
    options.cwd = Some(cwd.clone());

    let chain = token::default_chain(options.token.take(), env);
    options.token = token::resolve(&chain);

    let file = if !options.repos.is_empty() && !options.secrets.is_empty() {
        debug!("repos and secrets given, skipping config file");
        None
    } else {
        let path = cwd.join(options.config.as_deref().unwrap_or(Path::new(CONFIG_FILE)));
        Some(FileConfig::load(&path)?)
    };

    let config = Config::layer(Config::default(), file, options);
    debug!(config = ?config, "configuration layered");
    Ok(config)
}
