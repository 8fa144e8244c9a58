//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings, dry-run actions
//! - Cyan: repositories, secret names, hints
//! - Dimmed: secondary info

use std::fmt::Display;
use std::io::{self, Write as IoWrite};

use console::style;

use crate::core::config::Config;
use crate::core::report::Reporter;
use crate::core::sync::SyncReport;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print the tool name and version.
pub fn banner() {
    let name = env!("CARGO_PKG_NAME");
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    if colors_enabled() {
        println!("{} {}", style(name).yellow(), style(version).dim());
    } else {
        println!("{} {}", name, version);
    }
    println!();
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ done`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ please provide a GitHub token`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ Secret API_KEY not found in environment variables`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), style(msg).yellow());
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan), to stderr so it follows errors.
///
/// Example: `→ set GH_PAT or run: gh auth login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Format a name (repository or secret) in cyan.
pub fn name(n: &str) -> String {
    if colors_enabled() {
        style(n).cyan().to_string()
    } else {
        n.to_string()
    }
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        print!("{}... ", style(label).blue());
    } else {
        print!("{}... ", label);
    }
    let _ = io::stdout().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    if colors_enabled() {
        if success {
            println!("{}", style("ok").green());
        } else {
            println!("{}", style("failed").red());
        }
    } else {
        println!("{}", if success { "ok" } else { "failed" });
    }
}

/// Print a dry-run action line.
///
/// Example: `dry run: GET /repos/octo/hello/actions/secrets/public-key`
pub fn dry_run(action: &str) {
    if colors_enabled() {
        println!("{} {}", style("dry run:").dim(), style(action).yellow());
    } else {
        println!("dry run: {}", action);
    }
}

/// Print what is about to be synced.
pub fn plan(config: &Config) {
    kv("repos  ", config.repos.len());
    for repo in &config.repos {
        println!("    • {}", name(repo));
    }
    kv("secrets", config.secrets.len());
    for secret in &config.secrets {
        let remote = config.remote_name(secret);
        if remote == *secret {
            println!("    • {}", name(secret));
        } else {
            println!("    • {} → {}", name(secret), name(&remote));
        }
    }
    println!();
}

/// Print the outcome of a run.
pub fn summary(report: &SyncReport, dry: bool) {
    println!();
    if dry {
        kv("would sync", report.planned);
    } else {
        kv("created", report.created);
        kv("updated", report.updated);
    }
    if !report.skipped.is_empty() {
        kv("skipped", report.skipped.len());
    }
    success("Done");
}

/// [`Reporter`] that renders progress lines on the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Reporter for Console {
    fn step(&self, label: &str) {
        progress(label);
    }

    fn done(&self, ok: bool, _message: &str) {
        progress_done(ok);
    }

    fn dry_run(&self, action: &str) {
        dry_run(action);
    }

    fn warn(&self, message: &str) {
        warn(message);
    }
}
