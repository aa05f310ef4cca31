//! Deletion of superseded PoC files

use crate::error::DedupError;
use crate::resolve::duplicates::DuplicateSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How to treat a file that is superseded in one group but kept in another.
///
/// This only arises for files declaring several identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedFilePolicy {
    /// Each group decides alone; the file is deleted if any group supersedes it.
    #[default]
    Independent,
    /// A file kept by any duplicate group is never deleted.
    ProtectKept,
}

/// Files removed during one deletion pass, in removal order
#[derive(Debug, Default)]
pub struct DeletionLedger {
    removed: Vec<PathBuf>,
    seen: BTreeSet<PathBuf>,
}

impl DeletionLedger {
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    fn record(&mut self, path: &Path) {
        self.seen.insert(path.to_path_buf());
        self.removed.push(path.to_path_buf());
    }

    pub fn removed(&self) -> &[PathBuf] {
        &self.removed
    }

    pub fn len(&self) -> usize {
        self.removed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Remove every superseded member's file, keeping `members[0]` of each group.
///
/// A file already removed earlier in the pass is skipped. The first failed removal aborts
/// the pass; files removed before it stay removed.
pub fn delete_older(
    duplicates: &DuplicateSet,
    policy: SharedFilePolicy,
) -> Result<DeletionLedger, DedupError> {
    let protected: BTreeSet<&Path> = match policy {
        SharedFilePolicy::Independent => BTreeSet::new(),
        SharedFilePolicy::ProtectKept => duplicates
            .iter()
            .map(|group| group.kept().source_file.as_path())
            .collect(),
    };

    let mut ledger = DeletionLedger::default();
    for group in duplicates {
        for member in group.superseded() {
            let path = member.source_file.as_path();
            if ledger.contains(path) {
                continue;
            }
            if protected.contains(path) {
                debug!(file = %path.display(), identifier = %group.identifier, "kept elsewhere, not deleting");
                continue;
            }
            if let Err(source) = fs::remove_file(path) {
                warn!(
                    removed = ledger.len(),
                    files = ?ledger.removed(),
                    "deletion pass aborted"
                );
                return Err(DedupError::Deletion {
                    path: path.to_path_buf(),
                    source,
                });
            }
            info!(file = %path.display(), identifier = %group.identifier, "deleted superseded PoC");
            ledger.record(path);
        }
    }
    Ok(ledger)
}
