//! Command-line interface.

pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::info;

use crate::core::config::{self, Options};
use crate::core::constants::{API_VERSION, BASE_URL, CONFIG_FILE};
use crate::core::env::ProcessEnv;
use crate::core::github::GitHubClient;
use crate::core::remote::Remote;
use crate::core::resolve::Resolver;
use crate::core::sync::{SyncReport, Syncer};
use crate::error::Result;

/// Sync local environment secrets to GitHub Actions secrets.
#[derive(Parser, Debug)]
#[command(
    name = "gh-secrets-sync",
    about = "Sync local environment secrets to the Actions secrets of GitHub repositories",
    version,
    after_help = "Repos and secrets accept `*` patterns, e.g. --repos 'my-org/api-*'."
)]
pub struct Cli {
    /// Secrets config file (YAML with `repos` and `envs` lists)
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Repositories to sync (owner/name, patterns allowed)
    ///
    /// An entry containing `*` is a regex matched against the whole name,
    /// except that every `*` not preceded by `.` or `\` means "anything":
    /// `octo/api-*` equals `octo/api-.*`, and `octo/svc-\d*` reads as
    /// `octo/svc-\d.*`. Write `\*` for a literal star.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub repos: Vec<String>,

    /// Secret names to sync (patterns allowed)
    ///
    /// Patterns follow the same rules as --repos and are matched against the
    /// secrets of --repo.
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub secrets: Vec<String>,

    /// GitHub token (falls back to GH_PAT, GITHUB_TOKEN, then `gh auth token`)
    #[arg(long, env = "GH_SECRETS_SYNC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Prefix added to secret names on GitHub
    #[arg(long)]
    pub env_prefix: Option<String>,

    /// Fail if a secret is not found in the environment variables
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub strict: bool,

    /// Print the requests that would be made without making them
    #[arg(long)]
    pub dry: bool,

    /// Accept pattern matches without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Include private repositories when expanding patterns
    #[arg(long)]
    pub private: bool,

    /// Include forks when expanding patterns
    #[arg(long)]
    pub fork: bool,

    /// Repository whose secrets are listed to expand secret patterns
    /// (default: the origin remote of the current git repository)
    #[arg(long)]
    pub repo: Option<String>,

    /// GitHub REST API version
    #[arg(long, default_value = API_VERSION)]
    pub api_version: String,

    /// GitHub host
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Working directory the config file is resolved against
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert parsed flags into layering options.
    pub fn into_options(self) -> Options {
        Options {
            config: Some(self.config),
            repos: self.repos,
            secrets: self.secrets,
            token: self.token,
            env_prefix: self.env_prefix,
            api_version: Some(self.api_version),
            base_url: Some(self.base_url),
            repo: self.repo,
            cwd: self.cwd,
            private: Some(self.private),
            fork: Some(self.fork),
            strict: Some(self.strict),
            dry: Some(self.dry),
            yes: Some(self.yes),
        }
    }
}

/// Run a sync as described by `cli`.
///
/// # Errors
///
/// Returns the first fatal error; the caller decides how to report it.
pub async fn execute(cli: Cli) -> Result<SyncReport> {
    output::banner();

    let env = ProcessEnv;
    let config = config::load(cli.into_options(), &env)?;

    let client = GitHubClient::new(&config.base_url, &config.token, &config.api_version)?;
    let console = output::Console;
    let prompt = prompt::Prompt;
    let remote = Remote::new(&client, &console, config.dry);

    let config = Resolver::new(&remote, &prompt).resolve(config).await?;
    info!(config = ?config, "resolved");
    output::plan(&config);

    let report = Syncer::new(&config, &remote, &env).run().await?;
    output::summary(&report, config.dry);

    Ok(report)
}
