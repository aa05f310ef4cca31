//! Duplicate selection

use crate::group::{GroupIndex, IdentifierGroup};

/// Groups with more than one member, identifier ascending
pub type DuplicateSet = Vec<IdentifierGroup>;

pub fn find_duplicates(groups: &GroupIndex) -> DuplicateSet {
    let mut duplicates: DuplicateSet = groups
        .values()
        .filter(|group| group.is_duplicated())
        .cloned()
        .collect();
    // GroupIndex already iterates in order; the sort keeps this independent of the index type.
    duplicates.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    duplicates
}
