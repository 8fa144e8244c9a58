//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak a real token into a run.
const TOKEN_VARS: &[&str] = &["GH_PAT", "GITHUB_TOKEN", "GH_SECRETS_SYNC_TOKEN"];

impl Test {
    /// Create a gh-secrets-sync command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - No token variables and no host `PATH`
    /// - Colors and the log filter disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("gh-secrets-sync").expect("failed to find gh-secrets-sync binary");
        for var in TOKEN_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("GH_SECRETS_SYNC_LOG");
        cmd.env("PATH", self.bin.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Dry-run command with a token, the given arguments and secret values
    /// placed in the child's environment.
    pub fn dry_cmd(&self, args: &[&str], env: &[(&str, &str)]) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--dry", "--token", "test-token"]).args(args);
        for (k, v) in env {
            cmd.env(k, v);
        }
        cmd
    }

    /// Dry-run sync with secret values placed in the child's environment.
    pub fn dry_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        self.dry_cmd(args, env)
            .output()
            .expect("failed to run gh-secrets-sync --dry")
    }
}
