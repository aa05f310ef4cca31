//! Identifier and label extraction

use super::node::{DocumentNode, ParsedDocument};
use super::walker::{walk_key, Flow};
use std::collections::HashSet;

/// Key whose values identify the target a PoC describes
pub const IDENTIFIER_KEY: &str = "path";

/// Key holding a human-readable PoC label
pub const LABEL_KEY: &str = "name";

/// Every distinct scalar value stored under `key`, trimmed, blanks dropped, in first-seen order.
pub fn extract_all(document: &ParsedDocument, key: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    document.walk_key(key, |value| {
        if let Some(text) = value.as_scalar() {
            let text = text.trim();
            if !text.is_empty() && seen.insert(text.to_string()) {
                values.push(text.to_string());
            }
        }
        Flow::Continue
    });
    values
}

/// First non-blank scalar under `key` within the first top-level document, trimmed.
///
/// Returns an empty string when nothing matches.
pub fn extract_first(document: &ParsedDocument, key: &str) -> String {
    let Some(root) = document.first() else {
        return String::new();
    };
    let mut found = String::new();
    walk_key(root, key, &mut |value: &DocumentNode| match value.as_scalar().map(str::trim) {
        Some(text) if !text.is_empty() => {
            found = text.to_string();
            Flow::Stop
        }
        _ => Flow::Continue,
    });
    found
}
