//! Export of kept PoC files into a fresh tree

use crate::error::DedupError;
use crate::group::GroupIndex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One copied file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub identifier: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Default, Serialize)]
pub struct ExportSummary {
    pub out_root: PathBuf,
    pub files: Vec<ExportedFile>,
}

fn export_err(path: &Path) -> impl FnOnce(std::io::Error) -> DedupError + '_ {
    move |source| DedupError::Export {
        path: path.to_path_buf(),
        source,
    }
}

/// Destination of `source` below `out_root`, mirroring its place below `scan_root`.
///
/// Sources outside `scan_root` land directly in `out_root` under their base name.
pub fn destination_for(source: &Path, scan_root: &Path, out_root: &Path) -> PathBuf {
    match source.strip_prefix(scan_root) {
        Ok(relative) if !relative.as_os_str().is_empty() => out_root.join(relative),
        _ => out_root.join(source.file_name().unwrap_or(source.as_os_str())),
    }
}

/// Copy the kept file of every group, duplicated or not, into `out_root`.
///
/// Identifiers are processed in lexical order. Existing destination files are overwritten.
/// A file kept for several identifiers is copied once per identifier onto the same
/// destination, which is harmless.
pub fn export(
    groups: &GroupIndex,
    scan_root: &Path,
    out_root: &Path,
) -> Result<ExportSummary, DedupError> {
    let scan_root = dunce::canonicalize(scan_root).map_err(|source| DedupError::Io {
        path: scan_root.to_path_buf(),
        source,
    })?;
    fs::create_dir_all(out_root).map_err(export_err(out_root))?;
    let out_root = dunce::canonicalize(out_root).map_err(export_err(out_root))?;

    let mut summary = ExportSummary {
        out_root: out_root.clone(),
        files: Vec::with_capacity(groups.len()),
    };

    for (identifier, group) in groups {
        let kept = &group.kept().source_file;
        let source = dunce::canonicalize(kept).map_err(export_err(kept))?;
        let destination = destination_for(&source, &scan_root, &out_root);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(export_err(parent))?;
        }
        if source == destination {
            debug!(file = %source.display(), "export destination is the source, skipping copy");
        } else {
            fs::copy(&source, &destination).map_err(export_err(&destination))?;
            info!(
                identifier = %identifier,
                from = %source.display(),
                to = %destination.display(),
                "exported PoC"
            );
        }

        summary.files.push(ExportedFile {
            identifier: identifier.clone(),
            source,
            destination,
        });
    }
    Ok(summary)
}
