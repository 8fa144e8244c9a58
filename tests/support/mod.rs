//! Test support utilities for gh-secrets-sync integration tests.
//!
//! Provides an isolated environment for CLI runs and in-memory doubles for
//! the remote API, progress reporting and interactive selection.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock::*;

use std::path::Path;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Child processes run inside `dir` with a `PATH` pointing at the `bin`
/// directory, which holds only the tools a test installs with
/// [`Test::fake_tool`] or [`Test::host_tool`].
pub struct Test {
    /// Working directory of the run
    pub dir: TempDir,
    /// Directory used as the only `PATH` entry
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        Self { dir, bin }
    }

    /// Create a test environment with a config file in the working directory.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write("secrets.config.yaml", contents);
        t
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write file");
    }

    /// Install an executable shell script named `name` on the child's `PATH`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", script))
            .expect("failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to make fake tool executable");
    }

    /// Expose the host's `name` binary on the child's `PATH`.
    ///
    /// Returns false when the host does not have it.
    #[cfg(unix)]
    pub fn host_tool(&self, name: &str) -> bool {
        match which::which(name) {
            Ok(path) => {
                std::os::unix::fs::symlink(path, self.bin.path().join(name))
                    .expect("failed to link host tool");
                true
            }
            Err(_) => false,
        }
    }

    /// Run the host's git inside the working directory.
    pub fn git(&self, args: &[&str]) {
        let status = std::process::Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    /// Path of the working directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
