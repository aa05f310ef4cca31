//! Error types for PoC collection and duplicate resolution.
//!
//! Two layers: [`LoadError`] describes why a single candidate file contributes nothing to a scan and is
//! always recoverable, [`DedupError`] aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one candidate file into identifier records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] yaml_rust2::scanner::ScanError),

    #[error("missing {key} field")]
    MissingIdentifier { key: &'static str },
}

/// Fatal errors: traversal, destructive operations, and process setup.
#[derive(Debug, Error)]
pub enum DedupError {
    #[error("collecting PoCs under {root}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("remove {path}: {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("export {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("resolve {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing output: {0}")]
    Output(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Report error: {0}")]
    ReportError(String),
}

impl From<config::ConfigError> for DedupError {
    fn from(err: config::ConfigError) -> Self {
        DedupError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for DedupError {
    fn from(err: serde_json::Error) -> Self {
        DedupError::ReportError(err.to_string())
    }
}
