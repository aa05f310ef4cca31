//! PoC loading: read, parse, extract, stat

use crate::document::{extract_all, extract_first, parse_documents, IDENTIFIER_KEY, LABEL_KEY};
use crate::error::LoadError;
use crate::poc::record::IdentifierRecord;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Extensions, lowercase and without the dot, that the collector treats as PoC files.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Case-insensitive extension check against [`SUPPORTED_EXTENSIONS`]
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Load one PoC file into a record per distinct identifier it declares.
///
/// Either every identifier of the file is returned or the file fails as a whole.
pub fn load_poc(path: &Path) -> Result<Vec<IdentifierRecord>, LoadError> {
    let raw = fs::read_to_string(path)?;
    let document = parse_documents(&raw)?;

    let identifiers = extract_all(&document, IDENTIFIER_KEY);
    if identifiers.is_empty() {
        return Err(LoadError::MissingIdentifier {
            key: IDENTIFIER_KEY,
        });
    }

    let modified_at: DateTime<Utc> = fs::metadata(path)?.modified()?.into();

    let mut label = extract_first(&document, LABEL_KEY);
    if label.is_empty() {
        label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
    }

    Ok(identifiers
        .into_iter()
        .map(|identifier| IdentifierRecord {
            label: label.clone(),
            identifier,
            source_file: path.to_path_buf(),
            modified_at,
        })
        .collect())
}
