//! Collector
//!
//! Walks a scan root and loads every PoC file it finds. A file that fails to load is
//! recorded as skipped and logged; only a failure of the walk itself ends the scan.

use crate::error::{DedupError, LoadError};
use crate::poc::{is_supported_extension, load_poc, IdentifierRecord};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A candidate file that contributed no records, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one scan
#[derive(Debug, Default)]
pub struct Collection {
    /// Records in traversal order
    pub records: Vec<IdentifierRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl Collection {
    fn absorb(&mut self, path: &Path, loaded: Result<Vec<IdentifierRecord>, LoadError>) {
        match loaded {
            Ok(records) => {
                debug!(file = %path.display(), identifiers = records.len(), "loaded PoC");
                self.records.extend(records);
            }
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                self.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        }
    }
}

/// Scan `root` recursively, in lexical file-name order.
pub fn collect_pocs(root: &Path) -> Result<Collection, DedupError> {
    let mut collection = Collection::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| DedupError::Traversal {
            root: root.to_path_buf(),
            source,
        })?;
        if !is_supported_extension(entry.path()) {
            continue;
        }
        // Links are not followed, so a linked PoC is only seen through its target.
        if !entry.file_type().is_file() {
            if !entry.file_type().is_dir() {
                debug!(file = %entry.path().display(), "not a regular file, ignoring");
            }
            continue;
        }
        collection.absorb(entry.path(), load_poc(entry.path()));
    }

    debug!(
        root = %root.display(),
        records = collection.records.len(),
        skipped = collection.skipped.len(),
        "scan complete"
    );
    Ok(collection)
}
