//! Library exports for sibexec-cli.
//!
//! This module exports the CLI structure for use by integration tests and
//! documentation tooling.

pub mod cli;
pub mod error;
pub mod launch;

// Re-export CLI for tooling
pub use cli::Cli;
