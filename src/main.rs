//! gh-secrets-sync - Sync local environment secrets to GitHub Actions.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gh_secrets_sync::cli::output;
use gh_secrets_sync::cli::{execute, Cli};
use gh_secrets_sync::core::constants::LOG_ENV;
use gh_secrets_sync::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gh_secrets_sync=debug")
        } else {
            EnvFilter::new("gh_secrets_sync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
        .and_then(|rt| rt.block_on(execute(cli)));

    if let Err(e) = result {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingToken) => {
                Some("set GH_PAT or GITHUB_TOKEN, pass --token, or run: gh auth login")
            }
            Error::Config(ConfigError::ReadFile { .. }) => {
                Some("create secrets.config.yaml or pass --repos and --secrets")
            }
            Error::Config(ConfigError::RepoNotDetected(_)) => {
                Some("pass --repo owner/name to choose where secret names are listed")
            }
            Error::MissingEnv(_) => Some("export the variable or pass --strict false to skip it"),
            Error::Cancelled(_) => Some("pass --yes to accept every match without prompting"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
