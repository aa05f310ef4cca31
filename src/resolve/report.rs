//! Duplicate report rendering (text and JSON)

use crate::error::DedupError;
use crate::resolve::duplicates::DuplicateSet;
use serde::Serialize;
use std::path::PathBuf;

/// Serializable view of a duplicate set
#[derive(Debug, Serialize)]
pub struct DuplicateReport {
    pub group_count: usize,
    pub groups: Vec<GroupReport>,
}

#[derive(Debug, Serialize)]
pub struct GroupReport {
    pub identifier: String,
    pub keep: PathBuf,
    pub members: Vec<MemberReport>,
}

#[derive(Debug, Serialize)]
pub struct MemberReport {
    pub label: String,
    pub file: PathBuf,
    pub modified: String,
    pub kept: bool,
}

impl DuplicateReport {
    pub fn from_duplicates(duplicates: &DuplicateSet) -> Self {
        let groups = duplicates
            .iter()
            .map(|group| GroupReport {
                identifier: group.identifier.clone(),
                keep: group.kept().source_file.clone(),
                members: group
                    .members
                    .iter()
                    .enumerate()
                    .map(|(index, member)| MemberReport {
                        label: member.label.clone(),
                        file: member.source_file.clone(),
                        modified: member.modified_rfc3339(),
                        kept: index == 0,
                    })
                    .collect(),
            })
            .collect();
        Self {
            group_count: duplicates.len(),
            groups,
        }
    }
}

/// Human-readable report, one block per duplicated identifier.
pub fn format_report_text(duplicates: &DuplicateSet) -> String {
    let mut out = format!("Detected {} duplicated path groups:\n", duplicates.len());
    for group in duplicates {
        out.push_str(&format!("\nPath: {}\n", group.identifier));
        for member in &group.members {
            out.push_str(&format!(
                "  - name={:?} file={} modified={}\n",
                member.label,
                member.source_file.display(),
                member.modified_rfc3339()
            ));
        }
        out.push_str(&format!(
            "  * keep: {}\n",
            group.kept().source_file.display()
        ));
    }
    out
}

/// Pretty-printed JSON form of [`DuplicateReport`]
pub fn format_report_json(duplicates: &DuplicateSet) -> Result<String, DedupError> {
    Ok(serde_json::to_string_pretty(&DuplicateReport::from_duplicates(
        duplicates,
    ))?)
}
