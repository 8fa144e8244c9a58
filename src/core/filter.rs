//! Name pattern matching.
//!
//! Repositories and secrets may be selected by pattern. An entry is a pattern
//! when it contains `*`. Patterns are regular expressions matched against the
//! whole name, where a bare `*` (not already quantifying `.`) acts as a shell
//! wildcard: `org/api-*` and `org/api-.*` select the same repositories.
//!
//! The rewrite is purely lexical, so a `*` quantifying anything other than
//! `.` is widened as well: `svc-\d*` reads as `svc-\d.*` and `[a-z]*` as
//! `[a-z].*`. `\*` stays a literal star.

use regex::Regex;
use tracing::trace;

use crate::core::constants::WILDCARD;
use crate::error::{ConfigError, Result};

/// Returns true if `name` contains the wildcard marker.
pub fn is_pattern(name: &str) -> bool {
    name.contains(WILDCARD)
}

/// Compiled set of name patterns, matched with logical OR.
#[derive(Debug, Clone)]
pub struct Filter {
    /// `None` accepts everything.
    patterns: Option<Vec<Regex>>,
}

impl Filter {
    /// Compile the wildcard-bearing entries of `names`.
    ///
    /// Literal entries are ignored here; they are reconciled by exact name
    /// elsewhere. With no patterns at all, or with a lone `*` among them,
    /// the filter accepts every name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if a pattern is not a valid
    /// regular expression.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let patterns: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| is_pattern(n))
            .collect();

        if patterns.is_empty() || patterns.iter().any(|p| *p == "*") {
            trace!(patterns = patterns.len(), "filter accepts all");
            return Ok(Self { patterns: None });
        }

        let compiled = patterns
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns: Some(compiled),
        })
    }

    /// Filter that accepts every name.
    pub fn all() -> Self {
        Self { patterns: None }
    }

    /// Check a single name.
    pub fn matches(&self, name: &str) -> bool {
        match &self.patterns {
            None => true,
            Some(patterns) => patterns.iter().any(|re| re.is_match(name)),
        }
    }

    /// Predicate over entities, testing the field chosen by `field`.
    pub fn predicate<'a, T, F>(&'a self, field: F) -> impl Fn(&T) -> bool + 'a
    where
        F: Fn(&T) -> &str + 'a,
    {
        move |item| self.matches(field(item))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    let mut translated = String::with_capacity(pattern.len() + 8);
    let mut prev = None;
    for c in pattern.chars() {
        if c == WILDCARD && !matches!(prev, Some('.') | Some('\\')) {
            translated.push_str(".*");
        } else {
            translated.push(c);
        }
        prev = Some(c);
    }

    Regex::new(&format!("^(?:{})$", translated)).map_err(|source| {
        ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
        .into()
    })
}
