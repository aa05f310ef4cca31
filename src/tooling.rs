//! Tooling & Integration Layer
//!
//! The command-line surface over the scan / group / resolve pipeline.

pub mod cli;

pub use cli::{Cli, CliContext, RunRequest};
