//! Identifier record produced per distinct `path` in a PoC file

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::PathBuf;

/// One declared identifier of one PoC file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRecord {
    /// `name` of the PoC, or the file's base name when it has none
    pub label: String,
    /// Trimmed, non-empty `path` value
    pub identifier: String,
    pub source_file: PathBuf,
    pub modified_at: DateTime<Utc>,
}

impl IdentifierRecord {
    /// Modification time as RFC 3339, second precision
    pub fn modified_rfc3339(&self) -> String {
        self.modified_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
