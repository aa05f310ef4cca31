//! Schema-less Documents
//!
//! Generic node tree for parsed PoC files plus the key-driven walk and the identifier
//! extraction built on top of it. Nothing here knows the shape of a PoC; it only knows
//! scalars, sequences and mappings.

pub mod extract;
pub mod node;
pub mod walker;

pub use extract::{extract_all, extract_first, IDENTIFIER_KEY, LABEL_KEY};
pub use node::{parse_documents, DocumentNode, ParsedDocument};
pub use walker::{key_matches, walk_key, Flow};
