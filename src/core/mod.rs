//! Core library components.
//!
//! Configuration layering, pattern expansion, sealing and delivery of
//! secrets to GitHub repositories. Nothing here prints to the terminal;
//! progress goes through [`report::Reporter`] and prompts through
//! [`resolve::Selector`].

pub mod cipher;
pub mod config;
pub mod constants;
pub mod env;
pub mod filter;
pub mod git;
pub mod github;
pub mod remote;
pub mod report;
pub mod resolve;
pub mod sync;
pub mod token;
pub mod types;
