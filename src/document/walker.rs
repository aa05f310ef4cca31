//! Depth-first walk over document nodes, reporting values stored under a given key

use super::node::{DocumentNode, ParsedDocument};

/// Whether a walk keeps going after a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Case-insensitive key comparison after trimming. Only scalar keys can match.
pub fn key_matches(key: &DocumentNode, target: &str) -> bool {
    match key {
        DocumentNode::Scalar(text) => text.trim().to_lowercase() == target.trim().to_lowercase(),
        _ => false,
    }
}

/// Visit the value of every mapping entry whose key matches `key`, anywhere below `node`.
///
/// Pre-order, document order: a matching entry is reported before its own value is
/// descended into, so a `path` holding a collection still has its children walked.
pub fn walk_key<F>(node: &DocumentNode, key: &str, visitor: &mut F) -> Flow
where
    F: FnMut(&DocumentNode) -> Flow,
{
    match node {
        DocumentNode::Scalar(_) => Flow::Continue,
        DocumentNode::Sequence(items) => {
            for item in items {
                if walk_key(item, key, visitor) == Flow::Stop {
                    return Flow::Stop;
                }
            }
            Flow::Continue
        }
        DocumentNode::Mapping(entries) => {
            for (entry_key, value) in entries {
                if key_matches(entry_key, key) && visitor(value) == Flow::Stop {
                    return Flow::Stop;
                }
                if walk_key(value, key, visitor) == Flow::Stop {
                    return Flow::Stop;
                }
            }
            Flow::Continue
        }
    }
}

impl ParsedDocument {
    /// [`walk_key`] across every top-level document in stream order.
    pub fn walk_key<F>(&self, key: &str, mut visitor: F) -> Flow
    where
        F: FnMut(&DocumentNode) -> Flow,
    {
        for document in self.documents() {
            if walk_key(document, key, &mut visitor) == Flow::Stop {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}
