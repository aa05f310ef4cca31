//! pocdedup: PoC Deduplication
//!
//! Scans a tree of YAML/JSON proof-of-concept definitions, groups them by the `path` they
//! declare, and keeps the most recently modified definition of each path.

pub mod collect;
pub mod config;
pub mod document;
pub mod error;
pub mod group;
pub mod logging;
pub mod poc;
pub mod resolve;
pub mod tooling;

#[cfg(test)]
pub(crate) mod test_utils;
