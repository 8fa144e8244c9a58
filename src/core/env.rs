//! Environment lookups.
//!
//! Secret values and tokens come from the process environment. Lookups go
//! through [`EnvSource`] so resolution and sync can run against a fixed map.

use std::collections::HashMap;

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset or empty.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}
