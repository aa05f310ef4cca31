//! Grouper: partition records by identifier, newest first

use crate::poc::IdentifierRecord;
use std::collections::BTreeMap;

/// All records declaring one identifier, newest first.
///
/// Never empty; `members[0]` is the version that is kept.
#[derive(Debug, Clone)]
pub struct IdentifierGroup {
    pub identifier: String,
    pub members: Vec<IdentifierRecord>,
}

impl IdentifierGroup {
    pub fn kept(&self) -> &IdentifierRecord {
        &self.members[0]
    }

    /// Everything except the kept member
    pub fn superseded(&self) -> &[IdentifierRecord] {
        &self.members[1..]
    }

    pub fn is_duplicated(&self) -> bool {
        self.members.len() > 1
    }
}

/// Groups of one run keyed by identifier; iteration is lexical.
pub type GroupIndex = BTreeMap<String, IdentifierGroup>;

/// Partition `records` by identifier and order each partition by modification time,
/// newest first. Equal times keep discovery order.
pub fn group_records(records: Vec<IdentifierRecord>) -> GroupIndex {
    let mut partitions: BTreeMap<String, Vec<IdentifierRecord>> = BTreeMap::new();
    for record in records {
        partitions
            .entry(record.identifier.clone())
            .or_default()
            .push(record);
    }

    partitions
        .into_iter()
        .map(|(identifier, mut members)| {
            // sort_by is stable
            members.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
            (
                identifier.clone(),
                IdentifierGroup {
                    identifier,
                    members,
                },
            )
        })
        .collect()
}
