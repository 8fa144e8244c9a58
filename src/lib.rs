//! gh-secrets-sync - push local secrets to the Actions secrets of many
//! GitHub repositories in one pass.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output and progress reporter
//! │   └── prompt        # Interactive repo/secret selection
//! └── core/             # Core library components
//!     ├── config        # Defaults < config file < options layering
//!     ├── token         # Token provider chain
//!     ├── filter        # Name pattern matching
//!     ├── resolve       # Pattern expansion and validation
//!     ├── git           # Central repository detection
//!     ├── cipher        # Sealed-box encryption
//!     ├── github/       # GitHub REST API
//!     ├── remote        # Dry-run aware API front
//!     └── sync          # Per-repository delivery loop
//! ```
//!
//! # Flow
//!
//! 1. Layer the configuration and resolve a token.
//! 2. Expand `*` patterns in repos and secrets against GitHub, confirming
//!    the selection unless `--yes`.
//! 3. For each repository, fetch its public key once, then seal and upsert
//!    every secret found in the local environment.
//!
//! Secret values never leave the process unencrypted.

pub mod cli;
pub mod core;
pub mod error;
